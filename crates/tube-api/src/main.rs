//! Tube API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tube-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use tracing::{error, info};
use tube_common::{try_init_tracing, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // Configuration comes first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        backend = ?config.storage.backend,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = tube_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
