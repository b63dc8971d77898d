//! Login endpoints: OTP issue/verify and logout

use axum::{extract::Extension, http::StatusCode, response::Redirect, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::common::ApiError;
use crate::domains::auth::actions::{send_otp, verify_otp};
use crate::server::app::AppState;
use crate::server::auth::{
    credential_cookie, removal_cookie, session_cookie, Session, CREDENTIAL_COOKIE, SESSION_COOKIE,
};

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "redirectUrl", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl AuthResponse {
    fn ok() -> Self {
        Self {
            success: true,
            message: None,
            redirect_url: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            redirect_url: None,
        }
    }
}

/// POST /auth/send-otp
pub async fn send_otp_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<SendOtpRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    match send_otp(&request.email, &state.server_deps).await {
        Ok(()) => (StatusCode::OK, Json(AuthResponse::ok())),
        Err(e @ ApiError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failed(e.to_string())),
        ),
        // Business declines keep a 200 with success:false
        Err(e) => (StatusCode::OK, Json(AuthResponse::failed(e.to_string()))),
    }
}

/// POST /auth/verify-otp
///
/// On success both authentication representations are established: the
/// signed credential cookie and a server-side session with its own cookie.
pub async fn verify_otp_handler(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
    Json(request): Json<VerifyOtpRequest>,
) -> (StatusCode, CookieJar, Json<AuthResponse>) {
    let identity = match verify_otp(&request.email, &request.otp, &state.server_deps).await {
        Ok(identity) => identity,
        Err(e @ ApiError::Validation(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                jar,
                Json(AuthResponse::failed(e.to_string())),
            );
        }
        Err(e) => {
            return (StatusCode::OK, jar, Json(AuthResponse::failed(e.to_string())));
        }
    };

    let token = match state
        .jwt_service
        .create_token(&identity.email, &identity.name)
    {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to sign credential: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                Json(AuthResponse::failed("Failed to establish identity".to_string())),
            );
        }
    };

    let session_token = state
        .session_store
        .create_session(Session {
            email: identity.email.clone(),
            name: identity.name.clone(),
            last_seen: Utc::now(),
        })
        .await;

    let jar = jar
        .add(credential_cookie(token))
        .add(session_cookie(session_token));

    (
        StatusCode::OK,
        jar,
        Json(AuthResponse {
            success: true,
            message: None,
            redirect_url: Some("/scanner".to_string()),
        }),
    )
}

/// GET /auth/logout
///
/// Clears both authentication representations and sends the browser back
/// to the login page.
pub async fn logout_handler(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.session_store.delete_session(cookie.value()).await;
    }

    let jar = jar
        .remove(removal_cookie(SESSION_COOKIE))
        .remove(removal_cookie(CREDENTIAL_COOKIE));

    (jar, Redirect::to("/login"))
}
