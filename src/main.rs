//! Price Feeder entry point
//!
//! 1. Loads `.env` (optional) and initializes logging
//! 2. Resolves and validates configuration
//! 3. Logs the resolved configuration
//!
//! Any configuration error terminates the process with a diagnostic.

use anyhow::Context;
use tracing::{error, info};

use price_feeder::config::{self, logging};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    // Before resolution, so its warnings are emitted
    logging::init_logging();

    info!("Price feeder starting...");

    let config = config::resolve(&config::ProcessEnv)
        .inspect_err(|e| error!("[ERROR] Configuration failed: {}", e))
        .context("config error! check the environment")?
        .into_shared();

    logging::log_configuration(&config);
    info!(
        exchanges = config.exchanges_to_pair_to_symbol_map.len(),
        datasources = config.datasource_config_map.len(),
        "[CONFIG] Configuration resolved"
    );

    Ok(())
}
