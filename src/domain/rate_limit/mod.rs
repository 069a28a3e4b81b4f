//! Rate limiting domain
//!
//! Cooldown-based throttling keyed independently by requester email and
//! client IP.

mod limiter;

pub use limiter::{LimitedBy, RateLimitDecision, RateLimitScope, RateLimiter, DEFAULT_COOLDOWN};

#[cfg(test)]
pub use limiter::MockRateLimiter;
