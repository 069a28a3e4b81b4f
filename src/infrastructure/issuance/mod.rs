//! Credential issuance against the control plane

mod control_plane_client;
mod key_issuer;

pub use control_plane_client::{ControlPlaneSettings, HttpControlPlane};
pub use key_issuer::KeyIssuer;
