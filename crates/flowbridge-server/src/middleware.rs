//! Router middleware extensions.
//!
//! Middleware is applied in reverse order (last added = outermost):
//! recovery wraps observability, which wraps the routes.

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Tracing target for middleware events.
const TRACING_TARGET: &str = "flowbridge_server::middleware";

/// Adds request-id propagation and per-request tracing spans.
pub trait RouterObservabilityExt {
    /// Applies the observability layers.
    #[must_use]
    fn with_observability(self) -> Self;
}

impl RouterObservabilityExt for Router {
    fn with_observability(self) -> Self {
        self.layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }
}

/// Adds timeout enforcement and panic recovery.
pub trait RouterRecoveryExt {
    /// Applies the recovery layers with the given request timeout.
    #[must_use]
    fn with_recovery(self, request_timeout: Duration) -> Self;
}

impl RouterRecoveryExt for Router {
    fn with_recovery(self, request_timeout: Duration) -> Self {
        self.layer(CatchPanicLayer::custom(panic_response))
            .layer(TimeoutLayer::new(request_timeout))
    }
}

/// Converts a panic escaping a handler into the relay's server error.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        "unexpected panic".to_owned()
    };

    tracing::error!(
        target: TRACING_TARGET,
        error = %detail,
        "Request handler panicked"
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error processing events: {detail}"),
    )
        .into_response()
}
