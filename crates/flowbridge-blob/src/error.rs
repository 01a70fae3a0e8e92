//! Fetch error types.

use flowbridge_core::CredentialError;

use crate::blob_url::BlobUrlError;

/// Result type for fetch operations.
pub type FetchResult<T, E = FetchError> = std::result::Result<T, E>;

/// Errors that can occur while resolving or downloading a storage object.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The object reference could not be parsed.
    #[error("invalid blob URL: {0}")]
    InvalidUrl(#[from] BlobUrlError),

    /// The object does not exist.
    #[error("blob not found: {0}")]
    NotFound(String),

    /// The storage service rejected the credential.
    #[error("unauthorized blob access: {0}")]
    Unauthorized(String),

    /// The object content is not valid UTF-8.
    #[error("blob content is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// Credential acquisition failed.
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Backend-specific error, including network failures.
    #[error("storage backend error: {0}")]
    Backend(opendal::Error),
}

impl FetchError {
    /// Creates a new not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Creates a new unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Creates a new invalid encoding error.
    pub fn invalid_encoding(path: impl Into<String>) -> Self {
        Self::InvalidEncoding(path.into())
    }
}

impl From<opendal::Error> for FetchError {
    fn from(err: opendal::Error) -> Self {
        use opendal::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => Self::Unauthorized(err.to_string()),
            _ => Self::Backend(err),
        }
    }
}
