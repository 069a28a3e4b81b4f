//! Requester identity
//!
//! Turns a raw email address into a normalized identity plus a short,
//! stable correlation id used to name issued credentials.

mod entity;
mod validation;

pub use entity::{Identity, SHORT_ID_LENGTH};
pub use validation::{normalize_email, validate_email, EmailValidationError};
