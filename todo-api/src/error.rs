/// Error handling for the API server
///
/// Handlers return `Result<T, ApiError>`; the error converts into the HTTP
/// response the client sees.
///
/// | Variant | Status | Body |
/// |---|---|---|
/// | `NotFound` | 404 | `{ "message": ... }` |
/// | `Unauthorized` | 401 | `{ "message": ... }` |
/// | `ServiceUnavailable` | 503 | empty |
///
/// The cause carried by `ServiceUnavailable` is logged and never sent to the
/// client.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use todo_shared::service::AuthError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Unauthorized (401)
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Service unavailable (503); the payload is the internal cause
    ServiceUnavailable(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ServiceUnavailable(cause) => {
                tracing::error!(error = %cause, "Request failed");
                return StatusCode::SERVICE_UNAVAILABLE.into_response();
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_internal() {
            return ApiError::ServiceUnavailable(err.to_string());
        }

        match err {
            AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
            _ => ApiError::Unauthorized("Invalid password".to_string()),
        }
    }
}

/// Unreadable request bodies are reported as 503, the cause goes to the log
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ServiceUnavailable(format!("Invalid request body: {}", rejection.body_text()))
    }
}
