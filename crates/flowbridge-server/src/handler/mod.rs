//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod events;
mod monitors;

use axum::Router;
use axum::http::StatusCode;

use crate::service::ServiceState;

#[inline]
async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Returns a [`Router`] with all routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(events::routes())
        .merge(monitors::routes())
        .fallback(fallback)
}
