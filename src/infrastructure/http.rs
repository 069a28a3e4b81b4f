//! Shared reqwest helpers for remote collaborators

use std::time::Duration;

use reqwest::Client;

use crate::domain::error::{DomainError, RemoteError};

/// Build a client whose requests fail with a timeout after `timeout`
pub fn build_client(timeout: Duration) -> Result<Client, DomainError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))
}

/// Classify a transport-level reqwest failure
pub fn map_reqwest_error(service: &str, error: reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::timeout(service)
    } else if error.is_connect() {
        RemoteError::transport(service, format!("Connection failed: {}", error))
    } else {
        RemoteError::transport(service, format!("Request failed: {}", error))
    }
}

/// Status text of a non-2xx response body, truncated for logs
pub fn truncate_body(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
