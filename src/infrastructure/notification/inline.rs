//! Inline dispatcher for development setups

use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::RemoteError;
use crate::domain::identity::Identity;
use crate::domain::issuance::CredentialPair;
use crate::domain::notification::{Delivery, NotificationDispatcher};

/// Returns credentials in the HTTP response instead of emailing them
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDispatcher;

impl InlineDispatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationDispatcher for InlineDispatcher {
    async fn deliver(
        &self,
        identity: &Identity,
        _pair: &CredentialPair,
    ) -> Result<Delivery, RemoteError> {
        debug!(identity = %identity, "Returning demo keys inline");
        Ok(Delivery::Inline)
    }
}
