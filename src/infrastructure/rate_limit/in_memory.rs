//! In-memory rate limiter
//!
//! Keeps the last attempt timestamp per email and per IP. State lives only
//! as long as the process and is not shared between instances, so a restart
//! or a second replica starts with fresh windows. Entries are never evicted.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::rate_limit::{LimitedBy, RateLimitDecision, RateLimitScope, RateLimiter};

/// Last-attempt timestamps, both mappings behind one lock
#[derive(Debug, Default)]
struct Attempts {
    by_email: HashMap<String, i64>,
    by_ip: HashMap<String, i64>,
}

impl Attempts {
    fn map(&self, scope: RateLimitScope) -> &HashMap<String, i64> {
        match scope {
            RateLimitScope::Email => &self.by_email,
            RateLimitScope::Ip => &self.by_ip,
        }
    }
}

/// Memory-resident cooldown limiter for a single process
#[derive(Debug, Default)]
pub struct InMemoryRateLimiter {
    attempts: Mutex<Attempts>,
}

impl InMemoryRateLimiter {
    /// Create a new rate limiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and record against an explicit clock reading
    pub async fn check_and_record_at(
        &self,
        email_key: &str,
        ip_key: &str,
        window: Duration,
        now_millis: i64,
    ) -> RateLimitDecision {
        let window_millis = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
        let mut attempts = self.attempts.lock().await;

        let email_limited = is_within_window(attempts.by_email.get(email_key), now_millis, window_millis);
        let ip_limited = is_within_window(attempts.by_ip.get(ip_key), now_millis, window_millis);

        let limited_by = match (email_limited, ip_limited) {
            (true, true) => Some(LimitedBy::Both),
            (true, false) => Some(LimitedBy::Email),
            (false, true) => Some(LimitedBy::Ip),
            (false, false) => None,
        };

        if let Some(limited_by) = limited_by {
            return RateLimitDecision::Limited(limited_by);
        }

        attempts.by_email.insert(email_key.to_string(), now_millis);
        attempts.by_ip.insert(ip_key.to_string(), now_millis);

        RateLimitDecision::Allowed
    }

    /// Last recorded attempt for a key, in epoch milliseconds
    pub async fn last_attempt_millis(&self, scope: RateLimitScope, key: &str) -> Option<i64> {
        self.attempts.lock().await.map(scope).get(key).copied()
    }

    /// Number of tracked keys in a mapping
    pub async fn len(&self, scope: RateLimitScope) -> usize {
        self.attempts.lock().await.map(scope).len()
    }
}

fn is_within_window(last: Option<&i64>, now_millis: i64, window_millis: i64) -> bool {
    match last {
        Some(last) => now_millis.saturating_sub(*last) < window_millis,
        None => false,
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check_and_record(
        &self,
        email_key: &str,
        ip_key: &str,
        window: Duration,
    ) -> RateLimitDecision {
        let now = Utc::now().timestamp_millis();
        self.check_and_record_at(email_key, ip_key, window, now).await
    }
}
