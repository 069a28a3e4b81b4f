//! Notification domain
//!
//! Handing issued credentials back to the requester, either inline in the
//! HTTP response or through an outbound email.

mod dispatcher;
mod email;
mod template;

pub use dispatcher::{Delivery, NotificationDispatcher};
pub use email::{EmailMessage, EmailSender};
pub use template::{render_demo_key_message, DEFAULT_SUBJECT};

#[cfg(test)]
pub use dispatcher::MockNotificationDispatcher;
#[cfg(test)]
pub use email::MockEmailSender;
