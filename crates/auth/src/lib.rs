//! OAuth2 login and JWT session handling for the Monastery360 backend.
//!
//! The login flow is the standard authorization-code dance: the browser
//! is redirected to the provider, the callback exchanges the code for a
//! profile, and the session is carried in a signed JWT cookie. Nothing
//! here rejects a request; the [`MaybeUser`] extractor reports an
//! anonymous user whenever the token is absent or invalid, and handlers
//! decide what that means for them.

pub mod claims;
pub mod cookie;
pub mod error;
pub mod extract;
pub mod jwt;
pub mod pending;
pub mod provider;

pub use claims::Claims;
pub use cookie::{AUTH_COOKIE, clear_session_cookie, session_cookie};
pub use error::{AuthError, Result};
pub use extract::{MaybeUser, token_from_headers};
pub use jwt::JwtKeys;
pub use pending::PendingLogins;
pub use provider::{
    BeginLogin, GoogleProvider, IdentityProvider, StaticIdentityProvider, UserProfile,
};
