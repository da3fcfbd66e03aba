//! EventMap binary.
//!
//! Wires the stores to the view API and serves it until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `eventmap-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the session, catalog and viewport stores
//! 4. Serve the view API

mod error;

use std::path::Path;
use std::sync::Arc;

use eventmap_core::config::{EventMapConfig, LoggingConfig};
use eventmap_server::{AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "eventmap-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store construction or the server
/// fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Configuration comes first so the log level can be taken from it.
    let config = EventMapConfig::load_or_default(Path::new(CONFIG_PATH))?;

    init_logging(&config.logging);

    info!("eventmap starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        public_url = config.server.public_url,
        seed_demo_data = config.catalog.seed_demo_data,
        id_strategy = ?config.catalog.id_strategy,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config)?);

    let server_config = ServerConfig::from(config.server);
    eventmap_server::start_server(&server_config, state).await?;

    info!("eventmap stopped");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
