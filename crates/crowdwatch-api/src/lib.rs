//! HTTP API server for the Crowdwatch density-reporting service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /`** -- fixed health payload
//! - **`POST /report`** -- record a crowd-density observation and return a
//!   threshold-based alert classification
//! - **`GET /events`** -- the last 20 recorded events in arrival order
//!
//! # Architecture
//!
//! The only state is an in-memory, append-only [`EventLog`] owned by
//! [`AppState`] and guarded by a single `RwLock`: `report` appends under
//! the write half, `recent_events` snapshots under the read half, so a
//! reader never observes the log mid-append. There is no persistence,
//! no authentication, and no eviction -- the log lives and dies with the
//! process.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, EventLog, RECENT_EVENTS_LIMIT};
