//! API error types with HTTP response mapping.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Login or token error.
    Auth(AuthError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Auth(err) => auth_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn auth_error_to_response(err: AuthError) -> (StatusCode, String) {
    match &err {
        AuthError::ProviderConfig(_) | AuthError::TokenSigning(_) => {
            tracing::error!(error = %err, "authentication backend error");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        _ => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}
