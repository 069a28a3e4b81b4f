//! Notification dispatchers and the outbound email client

mod email_dispatcher;
mod factory;
mod inline;
mod resend;

pub use email_dispatcher::EmailDispatcher;
pub use factory::{create_dispatcher, DispatchMode};
pub use inline::InlineDispatcher;
pub use resend::{ResendEmailSender, ResendSettings, DEFAULT_RESEND_API_URL};
