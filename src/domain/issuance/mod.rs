//! Credential issuance domain
//!
//! A demo issuance creates two related credentials on the control plane:
//! an `ingest` key and an `executor` key.

mod control_plane;
mod credential;

pub use control_plane::ControlPlane;
pub use credential::{CredentialPair, CredentialRole, IssuanceError};

#[cfg(test)]
pub use control_plane::MockControlPlane;
