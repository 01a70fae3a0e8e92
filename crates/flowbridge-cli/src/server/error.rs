//! Server lifecycle error types.

use std::io;

/// Result type for server lifecycle operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Errors that can occur while running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration rejected at startup.
    #[error("invalid server configuration: {0}")]
    InvalidConfig(String),

    /// The listen address could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address the server tried to bind.
        address: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The server terminated with a runtime error.
    #[error("server runtime error: {0}")]
    Runtime(#[from] io::Error),
}
