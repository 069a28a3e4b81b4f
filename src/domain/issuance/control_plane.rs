//! Control plane collaborator trait

use async_trait::async_trait;

use super::CredentialRole;
use crate::domain::error::RemoteError;

#[cfg(test)]
use mockall::automock;

/// Remote service that mints scoped API credentials
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Create one credential and return its bearer token
    async fn create_credential(
        &self,
        role: CredentialRole,
        name: &str,
    ) -> Result<String, RemoteError>;
}
