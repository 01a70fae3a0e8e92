//! Graceful shutdown signal handling.

use std::time::Duration;

use crate::TRACING_TARGET_SHUTDOWN;

/// Waits for a shutdown signal (SIGINT/Ctrl+C, or SIGTERM on Unix) and
/// logs the configured drain timeout once one arrives.
pub async fn shutdown_signal(shutdown_timeout: Duration) {
    let signal = wait_for_signal().await;

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        signal = signal,
        timeout_secs = shutdown_timeout.as_secs(),
        "Graceful shutdown initiated"
    );
}

/// Resolves with the name of the first shutdown signal received.
async fn wait_for_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %err,
                "Failed to install Ctrl+C handler"
            );
            // Without a handler there is nothing to wait for.
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %err,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    }
}
