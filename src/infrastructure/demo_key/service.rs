//! Demo key request service
//!
//! One request runs `Validating -> RateChecking -> Issuing -> Delivering`
//! exactly once. Any failure ends the run with the matching
//! [`IssuanceOutcome`]; nothing is retried.
//!
//! The rate-limit entry is recorded before issuance, so an attempt that
//! later fails remotely still consumes the cooldown for its email and IP.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::domain::identity::Identity;
use crate::domain::issuance::ControlPlane;
use crate::domain::notification::NotificationDispatcher;
use crate::domain::rate_limit::{RateLimitDecision, RateLimiter};
use crate::domain::IssuanceOutcome;
use crate::infrastructure::issuance::KeyIssuer;

/// Step of the request state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    Validating,
    RateChecking,
    Issuing,
    Delivering,
}

impl std::fmt::Display for RequestStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validating => write!(f, "validating"),
            Self::RateChecking => write!(f, "rate_checking"),
            Self::Issuing => write!(f, "issuing"),
            Self::Delivering => write!(f, "delivering"),
        }
    }
}

/// Validates, throttles, issues and delivers demo keys
pub struct DemoKeyService {
    rate_limiter: Arc<dyn RateLimiter>,
    issuer: KeyIssuer,
    dispatcher: Arc<dyn NotificationDispatcher>,
    cooldown: Duration,
}

impl DemoKeyService {
    pub fn new(
        rate_limiter: Arc<dyn RateLimiter>,
        control_plane: Arc<dyn ControlPlane>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        cooldown: Duration,
    ) -> Self {
        Self {
            rate_limiter,
            issuer: KeyIssuer::new(control_plane),
            dispatcher,
            cooldown,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Handle one demo key request from `client_ip`
    pub async fn request_keys(&self, raw_email: &str, client_ip: &str) -> IssuanceOutcome {
        let outcome = self.run(raw_email, client_ip).await;
        log_outcome(&outcome, client_ip);
        outcome
    }

    async fn run(&self, raw_email: &str, client_ip: &str) -> IssuanceOutcome {
        debug!(stage = %RequestStage::Validating, "Demo key request");
        let identity = match Identity::derive(raw_email) {
            Ok(identity) => identity,
            Err(e) => return IssuanceOutcome::ValidationFailed(e),
        };

        debug!(stage = %RequestStage::RateChecking, identity = %identity, "Demo key request");
        let decision = self
            .rate_limiter
            .check_and_record(identity.normalized_email(), client_ip, self.cooldown)
            .await;

        if let RateLimitDecision::Limited(limited_by) = decision {
            return IssuanceOutcome::RateLimited(limited_by);
        }

        debug!(stage = %RequestStage::Issuing, identity = %identity, "Demo key request");
        let pair = match self.issuer.issue_pair(&identity).await {
            Ok(pair) => pair,
            Err(e) => return IssuanceOutcome::IssuanceFailed(e),
        };

        debug!(stage = %RequestStage::Delivering, identity = %identity, "Demo key request");
        match self.dispatcher.deliver(&identity, &pair).await {
            Ok(delivery) => {
                info!(identity = %identity, delivery = ?delivery, "Demo keys issued");
                IssuanceOutcome::Success { pair, delivery }
            }
            Err(e) => {
                // Credentials already exist; only the hand-off failed
                error!(
                    identity = %identity,
                    error = %e,
                    "Demo keys were issued but could not be delivered"
                );
                IssuanceOutcome::DeliveryFailed(e)
            }
        }
    }
}

fn log_outcome(outcome: &IssuanceOutcome, client_ip: &str) {
    match outcome {
        IssuanceOutcome::Success { .. } => {}
        IssuanceOutcome::ValidationFailed(e) => {
            warn!(outcome = outcome.kind(), client_ip = %client_ip, reason = %e, "Demo key request rejected");
        }
        IssuanceOutcome::RateLimited(limited_by) => {
            info!(outcome = outcome.kind(), client_ip = %client_ip, limited_by = %limited_by, "Demo key request rate limited");
        }
        IssuanceOutcome::IssuanceFailed(e) => {
            error!(
                outcome = outcome.kind(),
                stage = %e.stage,
                orphaned_ingest = e.left_orphaned_ingest(),
                error = %e.source,
                "IssuanceFailed: control plane credential creation failed"
            );
        }
        IssuanceOutcome::DeliveryFailed(e) => {
            error!(
                outcome = outcome.kind(),
                error = %e,
                "DeliveryFailed: credentials issued but not delivered"
            );
        }
    }
}
