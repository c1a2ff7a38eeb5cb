//! Configuration module for the price feeder
//!
//! This module provides:
//! - Configuration types (`Config`, symbol table and datasource aliases)
//! - The compiled-in default symbol table
//! - Environment sources (`ProcessEnv`, in-memory maps, dotenv files)
//! - The resolver (`resolve`, `load_config_with_dotenv`)
//! - Logging setup

mod defaults;
pub mod env;
mod loader;
pub mod logging;
mod types;

// Re-export types
pub use types::{Config, DataSourceConfigMap, ExchangeSymbolMap, ExchangeSymbolTable, SharedConfig};

pub use defaults::default_exchange_symbols_map;
pub use env::{EnvSource, Layered, ProcessEnv};

// Re-export loader functions and variable names
pub use loader::{
    load_config_with_dotenv, merge_exchange_symbols, resolve, SymbolsOverride,
    CHAIN_ID, DATASOURCE_CONFIG_MAP, ENABLE_TLS, EXCHANGE_SYMBOLS_MAP, FEEDER_MNEMONIC,
    GRPC_ENDPOINT, VALIDATOR_ADDRESS, WEBSOCKET_ENDPOINT,
};
