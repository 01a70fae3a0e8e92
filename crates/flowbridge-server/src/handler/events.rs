//! Notification relay handler.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::relay;
use crate::service::ServiceState;

/// Tracing target for relay handler operations.
const TRACING_TARGET: &str = "flowbridge_server::handler::events";

/// Accepts a batch of notification records and relays the actionable ones.
///
/// The body is taken as raw bytes so malformed input is answered with the
/// relay's own payload rejection rather than an extractor default.
#[tracing::instrument(skip_all)]
async fn ingest_events(State(state): State<ServiceState>, body: Bytes) -> Result<String> {
    let payload: Value = serde_json::from_slice(&body).map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET,
            error = %err,
            "Inbound body is not JSON"
        );
        Error::invalid_payload()
    })?;

    let Some(records) = payload.as_array() else {
        tracing::error!(
            target: TRACING_TARGET,
            "Inbound body is not an array of events"
        );
        return Err(Error::invalid_payload());
    };

    tracing::debug!(
        target: TRACING_TARGET,
        records = records.len(),
        "Relay triggered"
    );

    let summary = relay::process_batch(&state, records).await;

    Ok(format!(
        "Processed {} flow log events successfully",
        summary.processed
    ))
}

/// Returns a [`Router`] with the relay routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/events", post(ingest_events))
}
