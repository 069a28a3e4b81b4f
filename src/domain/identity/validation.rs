//! Email validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Coarse shape check: `<local>@<domain>.<tld>`, no further RFC rules
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid"));

/// Errors that can occur during email validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    #[error("Email address cannot be empty")]
    Empty,

    #[error("Email address must contain exactly one '@' with a local part and a domain")]
    Malformed,

    #[error("Email domain must contain a dot")]
    DomainWithoutDot,
}

/// Trim surrounding whitespace and lower-case the address
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate an already normalized email address
///
/// Rules:
/// - Cannot be empty
/// - Non-empty local part and domain separated by a single '@'
/// - Domain contains a dot with characters on both sides
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    if email.is_empty() {
        return Err(EmailValidationError::Empty);
    }

    if EMAIL_REGEX.is_match(email) {
        return Ok(());
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.contains('.') =>
        {
            Err(EmailValidationError::DomainWithoutDot)
        }
        _ => Err(EmailValidationError::Malformed),
    }
}
