//! Auth error types.

use thiserror::Error;

/// Errors that can occur during login and token operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Provider endpoint or redirect URL failed to parse.
    #[error("Invalid provider configuration: {0}")]
    ProviderConfig(String),

    /// The login state is unknown, already used, or expired.
    #[error("Unknown or expired login state")]
    UnknownLoginState,

    /// The authorization code exchange with the provider failed.
    #[error("Authorization code exchange failed: {0}")]
    CodeExchange(String),

    /// The userinfo request to the provider failed.
    #[error("Userinfo request failed: {0}")]
    UserInfo(String),

    /// The provider profile carries no email address.
    #[error("Provider profile has no email address")]
    MissingEmail,

    /// Token signing failed.
    #[error("Token signing failed: {0}")]
    TokenSigning(jsonwebtoken::errors::Error),

    /// Token validation failed.
    #[error("Token rejected: {0}")]
    TokenRejected(jsonwebtoken::errors::Error),
}

/// Convenience type alias for auth results.
pub type Result<T> = std::result::Result<T, AuthError>;
