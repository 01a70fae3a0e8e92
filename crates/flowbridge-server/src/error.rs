//! Request-boundary error types.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type alias for handler operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kinds surfaced at the request boundary.
///
/// Per-record failures never reach this type; they are absorbed into the
/// batch tally. Only payload-shape failures and unexpected faults escape
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The inbound body is not a notification batch.
    InvalidPayload,
    /// Anything unexpected escaping orchestration.
    Internal,
}

impl ErrorKind {
    /// Returns the error kind as a string for categorization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPayload => "invalid_payload",
            Self::Internal => "internal",
        }
    }

    /// Returns the response status for this kind.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-boundary error with a client-visible message.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl Error {
    /// Creates a new [`Error`].
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates the payload-shape rejection.
    #[inline]
    #[must_use]
    pub fn invalid_payload() -> Self {
        Self::new(ErrorKind::InvalidPayload, "Invalid Event Grid payload")
    }

    /// Creates an internal error from an unexpected fault.
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        let body = match self.kind {
            ErrorKind::InvalidPayload => self.message.into_owned(),
            ErrorKind::Internal => format!("Error processing events: {}", self.message),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_payload_has_exact_client_text() {
        let error = Error::invalid_payload();
        assert_eq!(error.kind(), ErrorKind::InvalidPayload);
        assert_eq!(error.message(), "Invalid Event Grid payload");
    }

    #[test]
    fn kinds_map_to_status_codes() {
        assert_eq!(
            ErrorKind::InvalidPayload.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorKind::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn kind_as_str() {
        assert_eq!(ErrorKind::InvalidPayload.as_str(), "invalid_payload");
        assert_eq!(ErrorKind::Internal.as_str(), "internal");
    }
}
