//! Infrastructure layer - remote clients, in-memory state and services

pub mod demo_key;
pub mod http;
pub mod issuance;
pub mod logging;
pub mod notification;
pub mod rate_limit;

pub use demo_key::DemoKeyService;
pub use issuance::{ControlPlaneSettings, HttpControlPlane, KeyIssuer};
pub use notification::{
    create_dispatcher, DispatchMode, EmailDispatcher, InlineDispatcher, ResendEmailSender,
    ResendSettings,
};
pub use rate_limit::InMemoryRateLimiter;
