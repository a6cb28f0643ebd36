//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "AUTH";

/// Builds the session cookie carrying a signed token.
///
/// HttpOnly with SameSite=Lax. The Secure flag follows deployment
/// config so local HTTP logins still work.
pub fn session_cookie(token: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age_seconds))
        .build()
}

/// Builds an expired cookie that clears the session.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, ""))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
