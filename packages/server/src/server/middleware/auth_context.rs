use axum::{
    extract::{Extension, Request},
    http::{header::SET_COOKIE, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Utc;
use tracing::debug;

use crate::server::app::AppState;
use crate::server::auth::{
    credential_cookie, session_cookie, Session, CREDENTIAL_COOKIE, SESSION_COOKIE,
};

/// Authenticated user information resolved from the request's cookies
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

/// Authentication context middleware
///
/// One resolution order for the two representations: the server-side
/// session wins, the signed credential is the fallback. When only the
/// credential is present, a fresh session is created and its cookie
/// attached to the response; the credential itself is re-issued once less
/// than half its validity window remains.
///
/// Note: this middleware does NOT block requests - it only resolves auth
/// info. Authorization checks happen in the route handlers.
pub async fn auth_context_middleware(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    // Preferred representation: the server-side session
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Some(session) = state.session_store.get_session(cookie.value()).await {
            request.extensions_mut().insert(AuthUser {
                email: session.email,
                name: session.name,
            });
            return next.run(request).await;
        }
    }

    // Fallback: the signed credential
    let claims = jar
        .get(CREDENTIAL_COOKIE)
        .and_then(|cookie| state.jwt_service.verify_token(cookie.value()).ok());
    let Some(claims) = claims else {
        debug!("No valid authentication cookie");
        return next.run(request).await;
    };

    request.extensions_mut().insert(AuthUser {
        email: claims.email.clone(),
        name: claims.name.clone(),
    });

    // Reconstitute the session from the credential
    let session_token = state
        .session_store
        .create_session(Session {
            email: claims.email.clone(),
            name: claims.name.clone(),
            last_seen: Utc::now(),
        })
        .await;

    let renewed = if state.jwt_service.should_renew(&claims) {
        state
            .jwt_service
            .create_token(&claims.email, &claims.name)
            .ok()
    } else {
        None
    };

    let mut response = next.run(request).await;
    append_set_cookie(&mut response, session_cookie(session_token));
    if let Some(token) = renewed {
        append_set_cookie(&mut response, credential_cookie(token));
    }
    response
}

fn append_set_cookie(response: &mut Response, cookie: Cookie<'static>) {
    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().append(SET_COOKIE, value);
    }
}
