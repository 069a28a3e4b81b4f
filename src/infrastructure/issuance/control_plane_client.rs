//! HTTP control plane client
//!
//! `POST <base>/keys` with an admin bearer token; a successful response
//! carries the new credential in its `token` field.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::error::{DomainError, RemoteError};
use crate::domain::issuance::{ControlPlane, CredentialRole};
use crate::infrastructure::http;

const SERVICE: &str = "control_plane";
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Connection settings for the control plane
#[derive(Debug, Clone)]
pub struct ControlPlaneSettings {
    pub base_url: Option<String>,
    pub admin_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct CreateKeyBody<'a> {
    name: &'a str,
    role: CredentialRole,
}

/// reqwest-backed control plane
#[derive(Debug, Clone)]
pub struct HttpControlPlane {
    client: Client,
    base_url: Option<String>,
    admin_token: Option<String>,
}

impl HttpControlPlane {
    pub fn new(settings: ControlPlaneSettings) -> Result<Self, DomainError> {
        let client = http::build_client(settings.timeout)?;

        Ok(Self {
            client,
            base_url: settings
                .base_url
                .filter(|url| !url.trim().is_empty())
                .map(|url| url.trim_end_matches('/').to_string()),
            admin_token: settings.admin_token.filter(|token| !token.is_empty()),
        })
    }

    /// Base URL without trailing slash, if configured
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn endpoint(&self) -> Result<(String, &str), RemoteError> {
        match (&self.base_url, &self.admin_token) {
            (Some(base), Some(token)) => Ok((format!("{}/keys", base), token.as_str())),
            _ => Err(RemoteError::not_configured(
                SERVICE,
                "control plane URL or admin token is missing",
            )),
        }
    }
}

#[async_trait]
impl ControlPlane for HttpControlPlane {
    async fn create_credential(
        &self,
        role: CredentialRole,
        name: &str,
    ) -> Result<String, RemoteError> {
        let (url, admin_token) = self.endpoint()?;

        debug!(role = %role, name = %name, "Creating control plane credential");

        let response = self
            .client
            .post(&url)
            .bearer_auth(admin_token)
            .json(&CreateKeyBody { name, role })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        let token = parsed.get("token").and_then(Value::as_str).filter(|t| !t.is_empty());

        match token {
            Some(token) if status.is_success() => Ok(token.to_string()),
            _ if !status.is_success() => Err(RemoteError::rejected(
                SERVICE,
                status.as_u16(),
                error_message(&parsed, &body),
            )),
            _ => Err(RemoteError::invalid_response(
                SERVICE,
                status.as_u16(),
                format!("response has no token: {}", error_message(&parsed, &body)),
            )),
        }
    }
}

/// Prefer the structured `error.message`, falling back to the raw body
fn error_message(parsed: &Value, raw: &str) -> String {
    parsed
        .pointer("/error/message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            if raw.is_empty() {
                "unknown error".to_string()
            } else {
                http::truncate_body(raw, MAX_ERROR_BODY_CHARS)
            }
        })
}

fn map_reqwest_error(error: reqwest::Error) -> RemoteError {
    http::map_reqwest_error(SERVICE, error)
}
