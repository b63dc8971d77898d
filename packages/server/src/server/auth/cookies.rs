//! Cookie construction for the two authentication representations

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Pointer to the server-side session; browser-session scoped
pub const SESSION_COOKIE: &str = "scanner_session";
/// Signed long-lived credential (JWT)
pub const CREDENTIAL_COOKIE: &str = "scanner_auth";

/// Credential cookie lifetime in days; matches the JWT validity window
const CREDENTIAL_MAX_AGE_DAYS: i64 = 30;

pub fn credential_cookie(token: String) -> Cookie<'static> {
    Cookie::build((CREDENTIAL_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(CREDENTIAL_MAX_AGE_DAYS))
        .build()
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    // No max-age: the browser drops it with the session. The server-side
    // idle timeout is the effective limit.
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Blank cookie with a matching path, for CookieJar::remove on logout
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, "")).path("/").build()
}
