//! Configuration types for the price feeder
//!
//! A `Config` is resolved once at startup and shared read-only across the
//! process via `Arc<Config>`.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::value::RawValue;

use crate::address::ValAddress;
use crate::asset::{AssetPair, Symbol};
use crate::error::ValidationError;

// ============================================================================
// Type Aliases
// ============================================================================

/// How one exchange labels each tracked pair
pub type ExchangeSymbolMap = HashMap<AssetPair, Symbol>;

/// Exchange name -> that exchange's symbol map
pub type ExchangeSymbolTable = HashMap<String, ExchangeSymbolMap>;

/// Exchange name -> unparsed config blob for that datasource
pub type DataSourceConfigMap = HashMap<String, Box<RawValue>>;

/// Type alias for shared read-only configuration access
pub type SharedConfig = Arc<Config>;

// ============================================================================
// Config
// ============================================================================

/// Resolved price feeder configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub exchanges_to_pair_to_symbol_map: ExchangeSymbolTable,
    pub datasource_config_map: DataSourceConfigMap,
    pub grpc_endpoint: String,
    pub websocket_endpoint: String,
    pub feeder_mnemonic: String,
    pub chain_id: String,
    /// Set only for delegated feeders
    pub validator_addr: Option<ValAddress>,
    pub enable_tls: bool,
}

impl Config {
    /// Check required fields, returning the first one that is missing
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chain_id.is_empty() {
            return Err(ValidationError::NoChainId);
        }
        if self.feeder_mnemonic.is_empty() {
            return Err(ValidationError::NoFeederMnemonic);
        }
        if self.websocket_endpoint.is_empty() {
            return Err(ValidationError::NoWebsocketEndpoint);
        }
        if self.grpc_endpoint.is_empty() {
            return Err(ValidationError::NoGrpcEndpoint);
        }
        Ok(())
    }

    /// Symbol map for one exchange, if it is configured
    pub fn symbols_for(&self, exchange: &str) -> Option<&ExchangeSymbolMap> {
        self.exchanges_to_pair_to_symbol_map.get(exchange)
    }

    /// Raw config blob for one datasource, if one was supplied
    pub fn datasource_config(&self, exchange: &str) -> Option<&RawValue> {
        self.datasource_config_map.get(exchange).map(|raw| raw.as_ref())
    }

    pub fn into_shared(self) -> SharedConfig {
        Arc::new(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_config() -> Config {
        Config {
            chain_id: "nibiru-localnet-0".to_string(),
            feeder_mnemonic: "guard cream sadness conduct".to_string(),
            websocket_endpoint: "ws://localhost:26657/websocket".to_string(),
            grpc_endpoint: "localhost:9090".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(create_valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_chain_id_fails() {
        let mut config = create_valid_config();
        config.chain_id = String::new();
        assert_eq!(config.validate(), Err(ValidationError::NoChainId));
    }

    #[test]
    fn test_missing_mnemonic_fails() {
        let mut config = create_valid_config();
        config.feeder_mnemonic = String::new();
        assert_eq!(config.validate(), Err(ValidationError::NoFeederMnemonic));
    }

    #[test]
    fn test_missing_websocket_fails() {
        let mut config = create_valid_config();
        config.websocket_endpoint = String::new();
        assert_eq!(config.validate(), Err(ValidationError::NoWebsocketEndpoint));
    }

    #[test]
    fn test_missing_grpc_fails() {
        let mut config = create_valid_config();
        config.grpc_endpoint = String::new();
        assert_eq!(config.validate(), Err(ValidationError::NoGrpcEndpoint));
    }

    #[test]
    fn test_first_failure_wins() {
        let config = Config::default();
        assert_eq!(config.validate(), Err(ValidationError::NoChainId));

        let mut config = create_valid_config();
        config.feeder_mnemonic = String::new();
        config.grpc_endpoint = String::new();
        assert_eq!(config.validate(), Err(ValidationError::NoFeederMnemonic));
    }

    #[test]
    fn test_optional_fields_not_validated() {
        let config = create_valid_config();
        assert!(config.validator_addr.is_none());
        assert!(config.exchanges_to_pair_to_symbol_map.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_datasource_lookup() {
        let mut config = create_valid_config();
        let raw = RawValue::from_string(r#"{"api_key":"k"}"#.to_string()).unwrap();
        config.datasource_config_map.insert("coingecko".to_string(), raw);
        assert_eq!(config.datasource_config("coingecko").unwrap().get(), r#"{"api_key":"k"}"#);
        assert!(config.datasource_config("okex").is_none());
    }

    #[test]
    fn test_into_shared() {
        let shared = create_valid_config().into_shared();
        assert_eq!(Arc::strong_count(&shared), 1);
        assert_eq!(shared.chain_id, "nibiru-localnet-0");
    }
}
