//! Request extractor for the optional authenticated user.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;

use crate::claims::Claims;
use crate::cookie::AUTH_COOKIE;
use crate::jwt::JwtKeys;

/// The user attached to a request, if any.
///
/// Token lookup prefers the session cookie and falls back to a bearer
/// `Authorization` header. A missing, expired, or otherwise invalid
/// token never rejects the request; handlers observe `None`.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Claims>);

impl MaybeUser {
    /// Resolves the user from raw headers.
    pub fn from_headers(headers: &HeaderMap, keys: &JwtKeys) -> Self {
        let Some(token) = token_from_headers(headers) else {
            return Self(None);
        };
        match keys.verify(&token) {
            Ok(claims) => Self(Some(claims)),
            Err(err) => {
                metrics::counter!("auth_tokens_rejected_total").increment(1);
                tracing::debug!(error = %err, "rejected session token");
                Self(None)
            }
        }
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        Ok(Self::from_headers(&parts.headers, &keys))
    }
}

/// Pulls the session token out of the request headers.
///
/// The `AUTH` cookie wins; a `Bearer` authorization header is the
/// fallback for non-browser clients.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(AUTH_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::provider::UserProfile;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";
    const MONTH_MS: i64 = 2_592_000_000;

    fn keys() -> JwtKeys {
        JwtKeys::new(SECRET, MONTH_MS)
    }

    fn profile() -> UserProfile {
        UserProfile {
            email: Some("monk@example.org".into()),
            name: Some("Tenzin".into()),
            picture: None,
        }
    }

    #[test]
    fn test_cookie_takes_precedence_over_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("AUTH=cookie-token; other=x"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer header-token"),
        );
        assert_eq!(token_from_headers(&headers).as_deref(), Some("cookie-token"));
    }

    #[test]
    fn test_bearer_header_is_the_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer header-token"),
        );
        assert_eq!(token_from_headers(&headers).as_deref(), Some("header-token"));
    }

    #[test]
    fn test_empty_headers_carry_no_token() {
        assert_eq!(token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_a_valid_token_resolves_to_claims() {
        let keys = keys();
        let token = keys.issue(&profile()).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("AUTH={token}")).unwrap(),
        );

        let user = MaybeUser::from_headers(&headers, &keys);
        let claims = user.0.unwrap();
        assert_eq!(claims.sub, "monk@example.org");
        assert_eq!(claims.name.as_deref(), Some("Tenzin"));
    }

    #[test]
    fn test_a_garbage_token_resolves_to_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("AUTH=not-a-jwt"),
        );
        let user = MaybeUser::from_headers(&headers, &keys());
        assert!(user.0.is_none());
    }
}
