//! Logging setup and startup configuration summary
//!
//! # Environment Variables
//! - `LOG_FORMAT`: Output format - `json` (default) or `pretty`
//! - `RUST_LOG`: Log level filter (default: `info`)

use tracing::info;
use tracing_subscriber::EnvFilter;

use super::types::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Anything other than `pretty` selects JSON
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize the global tracing subscriber from `LOG_FORMAT` and `RUST_LOG`
pub fn init_logging() {
    let format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init(),
    }
}

/// Log the resolved configuration. The mnemonic is never logged.
pub fn log_configuration(config: &Config) {
    info!("=== Price Feeder Configuration ===");
    info!("  - Chain ID: {}", config.chain_id);
    info!("  - gRPC endpoint: {}", config.grpc_endpoint);
    info!("  - Websocket endpoint: {}", config.websocket_endpoint);
    info!("  - TLS enabled: {}", config.enable_tls);

    match &config.validator_addr {
        Some(addr) => info!("  - Delegated for validator: {}", addr),
        None => info!("  - Delegated for validator: none"),
    }

    let mut exchanges: Vec<_> = config.exchanges_to_pair_to_symbol_map.iter().collect();
    exchanges.sort_by(|a, b| a.0.cmp(b.0));
    info!("Exchanges:");
    for (exchange, symbols) in exchanges {
        let mut pairs: Vec<String> = symbols.keys().map(|p| p.to_string()).collect();
        pairs.sort();
        info!("  - {}: {} pairs {:?}", exchange, pairs.len(), pairs);
    }

    let mut datasources: Vec<&String> = config.datasource_config_map.keys().collect();
    datasources.sort();
    info!("Datasource configs: {:?}", datasources);
    info!("==================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_defaults_to_json() {
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("yaml")), LogFormat::Json);
    }

    #[test]
    fn test_log_format_pretty() {
        assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Pretty);
    }

    #[test]
    fn test_log_configuration_without_subscriber() {
        // No subscriber installed: must not panic
        log_configuration(&Config::default());
    }
}
