//! Outcome of one demo key request

use super::error::RemoteError;
use super::identity::EmailValidationError;
use super::issuance::{CredentialPair, IssuanceError};
use super::notification::Delivery;
use super::rate_limit::LimitedBy;

/// Terminal state of a demo key request; exactly one per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuanceOutcome {
    Success {
        pair: CredentialPair,
        delivery: Delivery,
    },
    RateLimited(LimitedBy),
    ValidationFailed(EmailValidationError),
    IssuanceFailed(IssuanceError),
    /// Credentials exist remotely but never reached the requester
    DeliveryFailed(RemoteError),
}

impl IssuanceOutcome {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::RateLimited(_) => "rate_limited",
            Self::ValidationFailed(_) => "validation_failed",
            Self::IssuanceFailed(_) => "issuance_failed",
            Self::DeliveryFailed(_) => "delivery_failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<EmailValidationError> for IssuanceOutcome {
    fn from(error: EmailValidationError) -> Self {
        Self::ValidationFailed(error)
    }
}

impl From<IssuanceError> for IssuanceOutcome {
    fn from(error: IssuanceError) -> Self {
        Self::IssuanceFailed(error)
    }
}
