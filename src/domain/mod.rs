//! Domain layer - Core business logic and entities

pub mod error;
pub mod identity;
pub mod issuance;
pub mod notification;
pub mod outcome;
pub mod rate_limit;

pub use error::{DomainError, RemoteError};
pub use identity::{EmailValidationError, Identity};
pub use issuance::{ControlPlane, CredentialPair, CredentialRole, IssuanceError};
pub use notification::{Delivery, EmailMessage, EmailSender, NotificationDispatcher};
pub use outcome::IssuanceOutcome;
pub use rate_limit::{LimitedBy, RateLimitDecision, RateLimitScope, RateLimiter};
