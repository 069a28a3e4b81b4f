use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Failure of a call to a remote collaborator (control plane or email provider)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The remote service answered with a non-2xx status
    #[error("{service} rejected the request ({status}): {message}")]
    Rejected {
        service: String,
        status: u16,
        message: String,
    },

    /// The call did not complete within the client timeout
    #[error("{service} request timed out")]
    Timeout { service: String },

    /// Connection or protocol level failure before a response was received
    #[error("{service} request failed: {message}")]
    Transport { service: String, message: String },

    /// A 2xx response whose body could not be used
    #[error("{service} returned an unusable response ({status}): {message}")]
    InvalidResponse {
        service: String,
        status: u16,
        message: String,
    },

    /// Required settings for the remote service are missing
    #[error("{service} is not configured: {message}")]
    NotConfigured { service: String, message: String },
}

impl RemoteError {
    pub fn rejected(service: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            service: service.into(),
            status,
            message: message.into(),
        }
    }

    pub fn timeout(service: impl Into<String>) -> Self {
        Self::Timeout {
            service: service.into(),
        }
    }

    pub fn transport(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(
        service: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidResponse {
            service: service.into(),
            status,
            message: message.into(),
        }
    }

    pub fn not_configured(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotConfigured {
            service: service.into(),
            message: message.into(),
        }
    }

    /// HTTP status reported by the remote service, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
