//! HTTP route handlers.

use serde::Deserialize;

pub mod archives;
pub mod auth;
pub mod festivals;
pub mod health;
pub mod metrics;
pub mod monasteries;
pub mod search;

/// Query string carrying the user's search text.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}
