//! API error responses
//!
//! Callers only ever see one of a few fixed messages; details of remote
//! failures stay in server logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limited. Try again later.";
pub const ISSUANCE_FAILED_MESSAGE: &str = "Unable to issue demo key";

/// `{ "error": "<message>" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Malformed input, including unreadable or oversized bodies
    pub fn invalid_email() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_EMAIL_MESSAGE)
    }

    /// Email or IP is within its cooldown; which one is not disclosed
    pub fn rate_limited() -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED_MESSAGE)
    }

    /// Issuance or delivery failed; the stage is not disclosed
    pub fn issuance_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ISSUANCE_FAILED_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.response.error)
    }
}

impl std::error::Error for ApiError {}
