//! Claims carried by the session token.

use serde::{Deserialize, Serialize};

/// Claims embedded in a signed session token.
///
/// The subject is the account email. Profile fields are optional
/// because a provider may withhold any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account email.
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    /// The email for this session, falling back to the subject.
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.sub)
    }
}
