//! Axum router construction for the Crowdwatch API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access and per-request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Crowdwatch server.
///
/// The router includes:
/// - `GET /` -- fixed health payload
/// - `POST /report` -- record a density observation, return its alert
/// - `GET /events` -- last 20 events in arrival order
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/report", post(handlers::report))
        .route("/events", get(handlers::recent_events))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
