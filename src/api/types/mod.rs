//! Request and response types for the HTTP API

pub mod demo_key;
pub mod error;
pub mod json;

pub use demo_key::{DemoKeyRequest, DemoKeyResponse, OkResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
