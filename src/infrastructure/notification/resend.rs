//! Resend email client
//!
//! Sends plain-text mail through `POST <api_url>/emails`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::domain::error::{DomainError, RemoteError};
use crate::domain::notification::{EmailMessage, EmailSender};
use crate::infrastructure::http;

const SERVICE: &str = "email";
const MAX_ERROR_BODY_CHARS: usize = 500;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Connection settings for the Resend API
#[derive(Debug, Clone)]
pub struct ResendSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub from: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// reqwest-backed email sender
#[derive(Debug, Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    from: Option<String>,
}

impl ResendEmailSender {
    pub fn new(settings: ResendSettings) -> Result<Self, DomainError> {
        let client = http::build_client(settings.timeout)?;

        Ok(Self {
            client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.filter(|key| !key.is_empty()),
            from: settings.from.filter(|from| !from.is_empty()),
        })
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), RemoteError> {
        let (Some(api_key), Some(from)) = (&self.api_key, &self.from) else {
            return Err(RemoteError::not_configured(
                SERVICE,
                "email API key or sender address is missing",
            ));
        };

        debug!(subject = %message.subject, "Sending email");

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(api_key)
            .json(&SendEmailBody {
                from,
                to: [message.to.as_str()],
                subject: &message.subject,
                text: &message.text,
            })
            .send()
            .await
            .map_err(|e| http::map_reqwest_error(SERVICE, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::rejected(
            SERVICE,
            status.as_u16(),
            http::truncate_body(&body, MAX_ERROR_BODY_CHARS),
        ))
    }
}
