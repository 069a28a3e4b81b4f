//! Identity entity

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::validation::{normalize_email, validate_email, EmailValidationError};

/// Number of hex characters kept from the email digest
pub const SHORT_ID_LENGTH: usize = 10;

/// A validated requester identity
///
/// `short_id` is a display label for correlating remote resources with a
/// requester. Collisions are tolerated; it is never used as a security token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    normalized_email: String,
    short_id: String,
}

impl Identity {
    /// Normalize and validate a raw email, then derive its short id
    pub fn derive(raw_email: &str) -> Result<Self, EmailValidationError> {
        let normalized_email = normalize_email(raw_email);
        validate_email(&normalized_email)?;
        let short_id = short_hash(&normalized_email);

        Ok(Self {
            normalized_email,
            short_id,
        })
    }

    pub fn normalized_email(&self) -> &str {
        &self.normalized_email
    }

    pub fn short_id(&self) -> &str {
        &self.short_id
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_id)
    }
}

fn short_hash(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(SHORT_ID_LENGTH);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_normalizes_email() {
        let identity = Identity::derive("  User@Example.com ").unwrap();
        assert_eq!(identity.normalized_email(), "user@example.com");
    }

    #[test]
    fn test_short_id_is_ten_hex_chars() {
        let identity = Identity::derive("user@example.com").unwrap();
        assert_eq!(identity.short_id().len(), SHORT_ID_LENGTH);
        assert!(identity.short_id().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_short_id_is_sha256_prefix() {
        // sha256("user@example.com")
        let identity = Identity::derive("user@example.com").unwrap();
        assert_eq!(identity.short_id(), "b4c9a28932");
    }

    #[test]
    fn test_case_and_whitespace_do_not_change_identity() {
        let variants = [
            "user@example.com",
            "USER@EXAMPLE.COM",
            " User@Example.Com",
            "user@example.com\t",
            "\n  uSeR@eXaMpLe.CoM  ",
        ];

        let expected = Identity::derive(variants[0]).unwrap();
        for variant in variants {
            assert_eq!(Identity::derive(variant).unwrap(), expected, "{variant:?}");
        }
    }

    #[test]
    fn test_different_emails_give_different_ids() {
        let a = Identity::derive("alice@example.com").unwrap();
        let b = Identity::derive("bob@example.com").unwrap();
        assert_ne!(a.short_id(), b.short_id());
    }

    #[test]
    fn test_derive_rejects_malformed() {
        for raw in ["", "   ", "no-at-sign", "user@", "@example.com", "user@localhost"] {
            assert!(Identity::derive(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}
