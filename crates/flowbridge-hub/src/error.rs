//! Publish error types.

use flowbridge_core::CredentialError;

/// Result type for publish operations.
pub type PublishResult<T, E = PublishError> = std::result::Result<T, E>;

/// Errors that can occur while publishing to the ingestion endpoint.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The ingestion endpoint is not configured.
    #[error("ingestion configuration error: {0}")]
    Config(String),

    /// The endpoint rejected the credential.
    #[error("unauthorized by ingestion endpoint: {0}")]
    Unauthorized(String),

    /// The producer connection could not be established or maintained.
    #[error("ingestion connection error: {0}")]
    Connection(String),

    /// The target stream does not exist.
    #[error("ingestion stream '{stream}' not available: {reason}")]
    StreamMissing {
        /// Stream (hub) name that was looked up.
        stream: String,
        /// Endpoint-reported reason.
        reason: String,
    },

    /// The message could not be delivered.
    #[error("message delivery failed to subject '{subject}': {reason}")]
    Delivery {
        /// Subject the message was addressed to.
        subject: String,
        /// Endpoint-reported reason.
        reason: String,
    },

    /// Credential acquisition failed.
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),
}

impl PublishError {
    /// Creates a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Creates a new connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a new missing stream error.
    pub fn stream_missing(stream: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StreamMissing {
            stream: stream.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new delivery error.
    pub fn delivery(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Delivery {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}
