//! Event record and report payload types.
//!
//! An [`Event`] is one recorded density observation. The timestamp is
//! assigned by the server at the instant of receipt; clients only submit
//! the [`ReportRequest`] fields. Once appended to the log an event is
//! immutable and never removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded crowd-density observation.
///
/// Serialized shape on the wire:
///
/// ```json
/// {
///   "timestamp": "2026-08-05T12:34:56.789Z",
///   "source": "cam-03",
///   "location": "north-gate",
///   "density": 82.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned UTC timestamp at the instant the report was received.
    pub timestamp: DateTime<Utc>,
    /// Free-text identifier of the reporting sensor or agent.
    pub source: String,
    /// Free-text identifier of the monitored area.
    pub location: String,
    /// Reported crowd density. Intended range is 0-100 but the value is
    /// stored as given, without validation or clamping.
    pub density: f64,
}

impl Event {
    /// Build an event from a report, stamping it with the given receipt time.
    pub fn from_report(report: ReportRequest, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            source: report.source,
            location: report.location,
            density: report.density,
        }
    }
}

/// Wire input for `POST /report`.
///
/// Missing or type-mismatched fields fail deserialization, which rejects
/// the request before any event is stored. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Identifier of the reporting sensor or agent.
    pub source: String,
    /// Identifier of the monitored area.
    pub location: String,
    /// Reported crowd density (nominally 0-100, unvalidated).
    pub density: f64,
}
