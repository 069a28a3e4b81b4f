//! Outbound email collaborator

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::error::RemoteError;

#[cfg(test)]
use mockall::automock;

/// A plain-text email
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl std::fmt::Debug for EmailMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Body carries bearer tokens
        f.debug_struct("EmailMessage")
            .field("to", &self.to)
            .field("subject", &self.subject)
            .field("text", &"[REDACTED]")
            .finish()
    }
}

/// Provider-agnostic email sender
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), RemoteError>;
}
