//! Error types for the Crowdwatch service binary.
//!
//! [`ServiceError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the Crowdwatch service binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: crowdwatch_api::ServerError,
    },
}
