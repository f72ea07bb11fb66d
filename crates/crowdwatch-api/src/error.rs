//! Error types for the Crowdwatch API layer.
//!
//! [`ApiError`] unifies the handler failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

/// Errors that can occur while handling an API request.
///
/// The only client-visible error class is a malformed `/report` body:
/// missing or type-mismatched fields fail extraction before any event is
/// stored, so a rejected request never mutates the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The report body could not be deserialized.
    #[error("invalid report body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // JsonRejection already carries the right client-error status:
            // 422 for well-formed JSON with missing/mistyped fields, 400
            // for syntax errors, 415 for a missing JSON content type.
            Self::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
