//! Custom JSON extractor that turns every body rejection into a 400

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::ApiError;

/// Wrapper around `axum::Json` whose rejections use the API error format
///
/// Malformed JSON, a missing content type and bodies over the configured
/// limit all become validation failures before any handler logic runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Body rejection, logged with its cause and answered as a validation failure
#[derive(Debug)]
pub struct JsonRejection {
    reason: String,
}

impl JsonRejection {
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        ApiError::invalid_email().into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => {
                let reason = format_rejection_message(&rejection);
                warn!(status = %rejection.status(), reason = %reason, "Rejected request body");
                Err(JsonRejection { reason })
            }
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => "Missing Content-Type header".to_string(),
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
