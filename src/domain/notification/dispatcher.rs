//! Notification dispatcher trait

use async_trait::async_trait;

use crate::domain::error::RemoteError;
use crate::domain::identity::Identity;
use crate::domain::issuance::CredentialPair;

#[cfg(test)]
use mockall::automock;

/// How the credentials reached the requester
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Returned directly in the response body
    Inline,
    /// Sent to the requester's email address
    Emailed,
}

/// Delivers an issued credential pair to its requester
///
/// The delivery mode is fixed by the implementation chosen at startup.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn deliver(
        &self,
        identity: &Identity,
        pair: &CredentialPair,
    ) -> Result<Delivery, RemoteError>;
}
