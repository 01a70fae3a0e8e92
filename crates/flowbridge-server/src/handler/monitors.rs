//! Health check handler.

use axum::Json;
use axum::Router;
use axum::routing::get;
use flowbridge_core::ServiceHealth;

use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "flowbridge_server::handler::monitors";

/// Reports the relay's health.
///
/// The relay holds no state of its own and opens its collaborator
/// connections per call, so the basic check always reports healthy.
async fn health_status() -> Json<ServiceHealth> {
    tracing::debug!(
        target: TRACING_TARGET,
        "Health status check requested"
    );

    Json(ServiceHealth::healthy())
}

/// Returns a [`Router`] with the health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}
