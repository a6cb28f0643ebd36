//! Session token issuance and validation.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use crate::claims::Claims;
use crate::error::{AuthError, Result};
use crate::provider::UserProfile;

/// Minimum usable secret length for HS256 signing.
const MIN_SECRET_BYTES: usize = 32;

/// HMAC keys and lifetime settings for session tokens.
///
/// Tokens are HS256-signed. Cheap to clone; both keys are reference
/// counted internally.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_ms: i64,
}

impl JwtKeys {
    /// Builds keys from the configured secret.
    ///
    /// A secret shorter than 32 bytes is replaced with a random key, so
    /// sessions signed with it do not survive a restart.
    pub fn new(secret: &str, ttl_ms: i64) -> Self {
        if secret.len() < MIN_SECRET_BYTES {
            tracing::warn!(
                "jwt secret shorter than {MIN_SECRET_BYTES} bytes; using a random signing key"
            );
            let key: [u8; 32] = rand::thread_rng().r#gen();
            Self::from_bytes(&key, ttl_ms)
        } else {
            Self::from_bytes(secret.as_bytes(), ttl_ms)
        }
    }

    fn from_bytes(bytes: &[u8], ttl_ms: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            ttl_ms,
        }
    }

    /// Token lifetime in seconds, also used for the cookie max-age.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_ms / 1000
    }

    /// Issues a signed session token for a provider profile.
    ///
    /// The profile must carry an email; it becomes the token subject.
    pub fn issue(&self, profile: &UserProfile) -> Result<String> {
        let email = profile.email.clone().ok_or(AuthError::MissingEmail)?;
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.clone(),
            email: Some(email),
            name: profile.name.clone(),
            picture: profile.picture.clone(),
            iat: now,
            exp: now + self.ttl_seconds(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(AuthError::TokenSigning)
    }

    /// Validates a token signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::TokenRejected)
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("ttl_ms", &self.ttl_ms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";
    const MONTH_MS: i64 = 2_592_000_000;

    fn profile() -> UserProfile {
        UserProfile {
            email: Some("monk@example.org".into()),
            name: Some("Tenzin".into()),
            picture: Some("https://example.org/tenzin.png".into()),
        }
    }

    #[test]
    fn test_issue_then_verify_roundtrips_the_claims() {
        let keys = JwtKeys::new(SECRET, MONTH_MS);
        let token = keys.issue(&profile()).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "monk@example.org");
        assert_eq!(claims.email.as_deref(), Some("monk@example.org"));
        assert_eq!(claims.name.as_deref(), Some("Tenzin"));
        assert_eq!(claims.exp - claims.iat, MONTH_MS / 1000);
    }

    #[test]
    fn test_profile_without_email_cannot_get_a_token() {
        let keys = JwtKeys::new(SECRET, MONTH_MS);
        let profile = UserProfile {
            email: None,
            ..profile()
        };
        assert!(matches!(keys.issue(&profile), Err(AuthError::MissingEmail)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative lifetime puts the expiry well past the validation leeway.
        let keys = JwtKeys::new(SECRET, -120_000);
        let token = keys.issue(&profile()).unwrap();
        assert!(matches!(
            keys.verify(&token),
            Err(AuthError::TokenRejected(_))
        ));
    }

    #[test]
    fn test_token_signed_with_other_keys_is_rejected() {
        let keys = JwtKeys::new(SECRET, MONTH_MS);
        let other = JwtKeys::new("fedcba9876543210fedcba9876543210", MONTH_MS);

        let token = keys.issue(&profile()).unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let keys = JwtKeys::new(SECRET, MONTH_MS);
        let mut token = keys.issue(&profile()).unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_short_secret_falls_back_to_a_random_key() {
        let a = JwtKeys::new("short", MONTH_MS);
        let b = JwtKeys::new("short", MONTH_MS);

        let token = a.issue(&profile()).unwrap();
        assert!(a.verify(&token).is_ok());
        assert!(b.verify(&token).is_err());
    }

    #[test]
    fn test_ttl_is_reported_in_seconds() {
        let keys = JwtKeys::new(SECRET, MONTH_MS);
        assert_eq!(keys.ttl_seconds(), 2_592_000);
    }
}
