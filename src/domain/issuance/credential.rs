//! Credential types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::error::RemoteError;
use crate::domain::identity::Identity;

/// Scope of an issued credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialRole {
    Ingest,
    Executor,
}

impl CredentialRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingest => "ingest",
            Self::Executor => "executor",
        }
    }

    /// Remote resource name for this role, e.g. `demo-ingest-<short id>`
    pub fn credential_name(&self, identity: &Identity) -> String {
        format!("demo-{}-{}", self.as_str(), identity.short_id())
    }
}

impl std::fmt::Display for CredentialRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens issued for one identity, owned by a single request
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub ingest_token: String,
    pub executor_token: String,
}

impl CredentialPair {
    pub fn new(ingest_token: impl Into<String>, executor_token: impl Into<String>) -> Self {
        Self {
            ingest_token: ingest_token.into(),
            executor_token: executor_token.into(),
        }
    }
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("ingest_token", &"[REDACTED]")
            .field("executor_token", &"[REDACTED]")
            .finish()
    }
}

/// Failure of one step of the two-credential issuance
///
/// When `stage` is `Executor` the ingest credential already exists remotely
/// and is not revoked.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{stage} credential creation failed: {source}")]
pub struct IssuanceError {
    pub stage: CredentialRole,
    #[source]
    pub source: RemoteError,
}

impl IssuanceError {
    pub fn new(stage: CredentialRole, source: RemoteError) -> Self {
        Self { stage, source }
    }

    /// True when an ingest credential was left behind without its executor pair
    pub fn left_orphaned_ingest(&self) -> bool {
        self.stage == CredentialRole::Executor
    }
}
