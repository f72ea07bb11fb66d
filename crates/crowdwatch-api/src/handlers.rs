//! REST API endpoint handlers for the Crowdwatch server.
//!
//! All handlers go through the shared [`AppState`]; `report` takes the
//! write half of the event-log lock, `recent_events` the read half.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Fixed health payload |
//! | `POST` | `/report` | Record a density observation, return its alert |
//! | `GET` | `/events` | Last 20 events in arrival order |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use chrono::Utc;
use crowdwatch_types::{AlertLevel, Event, ReportRequest};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::{AppState, RECENT_EVENTS_LIMIT};

// ---------------------------------------------------------------------------
// GET / -- health check
// ---------------------------------------------------------------------------

/// Return the fixed health payload.
///
/// No inputs, no side effects; the response is identical regardless of
/// prior state.
// Axum handlers must be async even without await points.
#[allow(clippy::unused_async)]
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Backend is running 🚀",
    }))
}

// ---------------------------------------------------------------------------
// POST /report -- record a density observation
// ---------------------------------------------------------------------------

/// Record a new density observation and classify its alert.
///
/// The event timestamp is assigned at receipt, while the write lock is
/// held, so stored order and timestamp order agree. A malformed body is
/// rejected before the lock is taken: no partial event is ever stored.
///
/// The alert is derived from the reported density and returned alongside
/// the stored event; it is not persisted.
pub async fn report(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let mut log = state.events.write().await;
    let event = Event::from_report(request, Utc::now());
    let alert = AlertLevel::classify(event.density).map(|level| level.message(&event.location));
    log.append(event.clone());
    let total = log.len();
    drop(log);

    info!(
        source = %event.source,
        location = %event.location,
        density = event.density,
        total,
        "density report stored"
    );
    if let Some(message) = &alert {
        warn!(location = %event.location, alert = %message, "density alert raised");
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "event": event,
        "alert": alert,
    })))
}

// ---------------------------------------------------------------------------
// GET /events -- recent events
// ---------------------------------------------------------------------------

/// Return the last [`RECENT_EVENTS_LIMIT`] events in original insertion
/// order, oldest of the window first.
///
/// Read-only: repeated calls with no intervening report return identical
/// results.
pub async fn recent_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let log = state.events.read().await;
    Json(log.recent(RECENT_EVENTS_LIMIT))
}
