//! Dispatcher factory for startup-time selection

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::notification::NotificationDispatcher;
use crate::domain::DomainError;

use super::email_dispatcher::EmailDispatcher;
use super::inline::InlineDispatcher;
use super::resend::{ResendEmailSender, ResendSettings};

/// Supported delivery modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Keys are returned in the HTTP response; development only
    Inline,
    /// Keys are emailed to the requester
    #[default]
    Email,
}

impl DispatchMode {
    pub fn from_inline_flag(return_keys_inline: bool) -> Self {
        if return_keys_inline {
            Self::Inline
        } else {
            Self::Email
        }
    }
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline => write!(f, "inline"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// Build the dispatcher for `mode`
///
/// `control_plane_url` is the address embedded in emailed config snippets.
pub fn create_dispatcher(
    mode: DispatchMode,
    email: ResendSettings,
    control_plane_url: &str,
    subject: &str,
) -> Result<Arc<dyn NotificationDispatcher>, DomainError> {
    info!(mode = %mode, "Creating notification dispatcher");

    match mode {
        DispatchMode::Inline => {
            warn!("Demo keys will be returned inline in HTTP responses; do not use in production");
            Ok(Arc::new(InlineDispatcher::new()))
        }
        DispatchMode::Email => {
            let sender = ResendEmailSender::new(email)?;
            Ok(Arc::new(EmailDispatcher::new(
                Arc::new(sender),
                control_plane_url,
                subject,
            )))
        }
    }
}
