//! Cantina server entry point.
//!
//! Loads and validates configuration, initializes tracing, and starts the
//! HTTP server.

use tracing_subscriber::{fmt, EnvFilter};

use cantina_core::config::AppConfig;
use cantina_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting Cantina v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cantina_api::run_server(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, and reject startup states
/// that must never reach request handling (empty signing key).
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CANTINA_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;

    Ok(config)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
