//! Email dispatcher

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::error::RemoteError;
use crate::domain::identity::Identity;
use crate::domain::issuance::CredentialPair;
use crate::domain::notification::{
    render_demo_key_message, Delivery, EmailMessage, EmailSender, NotificationDispatcher,
};

/// Emails the credential pair and a config snippet to the requester
pub struct EmailDispatcher {
    sender: Arc<dyn EmailSender>,
    control_plane_url: String,
    subject: String,
}

impl EmailDispatcher {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        control_plane_url: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            control_plane_url: control_plane_url.into(),
            subject: subject.into(),
        }
    }

    fn compose(&self, identity: &Identity, pair: &CredentialPair) -> EmailMessage {
        EmailMessage {
            to: identity.normalized_email().to_string(),
            subject: self.subject.clone(),
            text: render_demo_key_message(&self.control_plane_url, pair),
        }
    }
}

#[async_trait]
impl NotificationDispatcher for EmailDispatcher {
    async fn deliver(
        &self,
        identity: &Identity,
        pair: &CredentialPair,
    ) -> Result<Delivery, RemoteError> {
        let message = self.compose(identity, pair);
        self.sender.send(&message).await?;

        info!(identity = %identity, "Demo keys emailed");
        Ok(Delivery::Emailed)
    }
}
