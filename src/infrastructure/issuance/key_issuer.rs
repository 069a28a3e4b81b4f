//! Two-step credential issuance
//!
//! Creates the ingest credential, then the executor credential. There is no
//! compensation: if the executor step fails, the ingest credential stays on
//! the control plane and the failure is reported with `stage = executor`.
//! Neither step is retried, so a failure never mints duplicate ingest keys.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::identity::Identity;
use crate::domain::issuance::{ControlPlane, CredentialPair, CredentialRole, IssuanceError};

/// Issues ingest/executor credential pairs for an identity
pub struct KeyIssuer {
    control_plane: Arc<dyn ControlPlane>,
}

impl KeyIssuer {
    pub fn new(control_plane: Arc<dyn ControlPlane>) -> Self {
        Self { control_plane }
    }

    /// Create both credentials for `identity`, ingest first
    pub async fn issue_pair(&self, identity: &Identity) -> Result<CredentialPair, IssuanceError> {
        let ingest_token = self.create(identity, CredentialRole::Ingest).await?;

        let executor_token = self
            .create(identity, CredentialRole::Executor)
            .await
            .inspect_err(|e| {
                warn!(
                    identity = %identity,
                    ingest_name = %CredentialRole::Ingest.credential_name(identity),
                    error = %e.source,
                    "Executor credential failed after ingest credential was created; ingest credential is left in place"
                );
            })?;

        Ok(CredentialPair::new(ingest_token, executor_token))
    }

    async fn create(
        &self,
        identity: &Identity,
        role: CredentialRole,
    ) -> Result<String, IssuanceError> {
        let name = role.credential_name(identity);

        let token = self
            .control_plane
            .create_credential(role, &name)
            .await
            .map_err(|e| IssuanceError::new(role, e))?;

        debug!(role = %role, name = %name, "Credential created");
        Ok(token)
    }
}
