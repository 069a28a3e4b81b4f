//! Rate limiter trait

use std::time::Duration;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Default cooldown between issuances for the same email or IP
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(24 * 60 * 60);

/// Which mapping a rate-limit entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLimitScope {
    Email,
    Ip,
}

impl std::fmt::Display for RateLimitScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Ip => write!(f, "ip"),
        }
    }
}

/// Which key caused a rejection; for server-side logs only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitedBy {
    Email,
    Ip,
    Both,
}

impl std::fmt::Display for LimitedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Ip => write!(f, "ip"),
            Self::Both => write!(f, "email+ip"),
        }
    }
}

/// Result of a combined check-and-record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    Limited(LimitedBy),
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Dual-keyed cooldown limiter
///
/// `check_and_record` must be atomic with respect to concurrent callers that
/// share either key: both lookups happen before any write, and a limited
/// result writes nothing.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check both keys and, if neither is within `window`, record now for both
    async fn check_and_record(
        &self,
        email_key: &str,
        ip_key: &str,
        window: Duration,
    ) -> RateLimitDecision;
}
