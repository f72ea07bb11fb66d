//! Crowdwatch service binary.
//!
//! This is the main entry point for the density-reporting HTTP service.
//! It loads configuration, initializes structured logging, builds the
//! shared event-log state, and runs the Axum server until termination.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `crowdwatch-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the shared application state (empty event log)
//! 4. Run the HTTP server until `Ctrl-C`

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use crowdwatch_api::state::AppState;
use crowdwatch_api::{ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Path of the YAML configuration file, relative to the working directory.
const CONFIG_FILE: &str = "crowdwatch-config.yaml";

/// Application entry point for the Crowdwatch service.
///
/// # Errors
///
/// Returns an error if configuration loading or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so remember where the
    //    config came from and report it afterwards.
    let config_path = Path::new(CONFIG_FILE);
    let from_file = config_path.exists();
    let config = load_config(config_path)?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("crowdwatch-server starting");
    if from_file {
        info!(path = CONFIG_FILE, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        level = config.logging.level,
        "Effective configuration"
    );

    // 3. Build the shared application state.
    let state = Arc::new(AppState::new());

    // 4. Run the HTTP server until termination.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state)
        .await
        .map_err(ServiceError::from)?;

    info!("crowdwatch-server shutdown complete");

    Ok(())
}

/// Load the service configuration from `crowdwatch-config.yaml`.
///
/// Looks for the config file relative to the current working directory;
/// defaults (plus env overrides) are used when it does not exist.
fn load_config(path: &Path) -> Result<ServiceConfig, ServiceError> {
    if path.exists() {
        let config = ServiceConfig::from_file(path)?;
        Ok(config)
    } else {
        let mut config = ServiceConfig::default();
        config.server.apply_env_overrides();
        Ok(config)
    }
}
