//! Shared application state for the Crowdwatch API server.
//!
//! [`AppState`] owns the in-memory [`EventLog`] that every request handler
//! reads or appends to. The log is the only shared mutable state in the
//! service: a single [`RwLock`] guards it so that appends and
//! snapshot-reads are serialized with respect to each other.

use std::sync::Arc;

use crowdwatch_types::Event;
use tokio::sync::RwLock;

/// Number of events returned by `GET /events`.
pub const RECENT_EVENTS_LIMIT: usize = 20;

/// Append-only, insertion-ordered log of density events.
///
/// The log grows without bound for the lifetime of the process: once
/// appended, an event is never mutated or removed. There is no teardown
/// persistence.
#[derive(Debug, Default)]
pub struct EventLog {
    /// All events in arrival order, oldest first.
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the log.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// The last `limit` events in original insertion order.
    ///
    /// Returns all events when fewer than `limit` exist, and an empty
    /// vector when the log is empty.
    pub fn recent(&self, limit: usize) -> Vec<Event> {
        let start = self.events.len().saturating_sub(limit);
        self.events.iter().skip(start).cloned().collect()
    }

    /// Total number of events recorded since startup.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log has recorded no events yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// event log is initialized empty at process start.
#[derive(Debug, Default)]
pub struct AppState {
    /// The process-wide event log.
    pub events: Arc<RwLock<EventLog>>,
}

impl AppState {
    /// Create a new application state with an empty event log.
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(EventLog::new())),
        }
    }
}
