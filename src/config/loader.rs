//! Configuration resolver
//!
//! This module turns environment inputs into a validated `Config`:
//! 1. Reads the plain string settings
//! 2. Merges `EXCHANGE_SYMBOLS_MAP` onto the compiled-in symbol table
//! 3. Collects raw per-datasource config blobs
//! 4. Decodes the optional validator address
//! 5. Validates the required fields

use std::collections::HashMap;
use std::path::Path;

use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::address::ValAddress;
use crate::asset::{AssetPair, Symbol};
use crate::error::{ConfigError, Result};
use crate::sources;

use super::defaults::default_exchange_symbols_map;
use super::env::{dotenv_file, EnvSource, Layered, ProcessEnv};
use super::types::{Config, DataSourceConfigMap, ExchangeSymbolMap, ExchangeSymbolTable};

pub const CHAIN_ID: &str = "CHAIN_ID";
pub const GRPC_ENDPOINT: &str = "GRPC_ENDPOINT";
pub const WEBSOCKET_ENDPOINT: &str = "WEBSOCKET_ENDPOINT";
pub const FEEDER_MNEMONIC: &str = "FEEDER_MNEMONIC";
pub const ENABLE_TLS: &str = "ENABLE_TLS";
pub const EXCHANGE_SYMBOLS_MAP: &str = "EXCHANGE_SYMBOLS_MAP";
pub const DATASOURCE_CONFIG_MAP: &str = "DATASOURCE_CONFIG_MAP";
pub const VALIDATOR_ADDRESS: &str = "VALIDATOR_ADDRESS";

/// Shape of `EXCHANGE_SYMBOLS_MAP`: exchange -> pair string -> symbol.
/// A `null` pair map clears that exchange.
pub type SymbolsOverride = HashMap<String, Option<HashMap<String, String>>>;

/// Resolve and validate configuration from any environment source
///
/// # Returns
/// * `Ok(Config)` - All required fields present
/// * `Err(ConfigError)` - Invalid JSON, malformed pair, or missing required field
pub fn resolve<E: EnvSource>(env: &E) -> Result<Config> {
    let overrides = parse_symbols_override(&env.var_or_empty(EXCHANGE_SYMBOLS_MAP))?;
    let exchanges_to_pair_to_symbol_map =
        merge_exchange_symbols(default_exchange_symbols_map(), overrides)?;
    let datasource_config_map = parse_datasource_config(&env.var_or_empty(DATASOURCE_CONFIG_MAP))?;

    let config = Config {
        exchanges_to_pair_to_symbol_map,
        datasource_config_map,
        grpc_endpoint: env.var_or_empty(GRPC_ENDPOINT),
        websocket_endpoint: env.var_or_empty(WEBSOCKET_ENDPOINT),
        feeder_mnemonic: env.var_or_empty(FEEDER_MNEMONIC),
        chain_id: env.var_or_empty(CHAIN_ID),
        validator_addr: parse_validator_address(&env.var_or_empty(VALIDATOR_ADDRESS)),
        enable_tls: env.var_or_empty(ENABLE_TLS) == "true",
    };

    config.validate()?;

    Ok(config)
}

/// Resolve from the process environment layered over a dotenv file
///
/// The file is not applied to the process environment. A missing file is
/// treated as empty; an unreadable or malformed one is an error.
pub fn load_config_with_dotenv(path: &Path) -> Result<Config> {
    let file_vars = match dotenv_file(path) {
        Ok(vars) => vars,
        Err(ConfigError::EnvFile { source, .. }) if source.not_found() => {
            debug!(path = %path.display(), "Env file not found, using process environment only");
            HashMap::new()
        }
        Err(e) => return Err(e),
    };

    resolve(&Layered {
        primary: ProcessEnv,
        fallback: file_vars,
    })
}

// ============================================================================
// Resolution steps
// ============================================================================

/// `""` is not valid JSON; `{}` means no override. `null` is also accepted as
/// no override.
fn parse_symbols_override(json: &str) -> Result<SymbolsOverride> {
    let parsed: Option<SymbolsOverride> =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            var: EXCHANGE_SYMBOLS_MAP,
            source,
        })?;
    Ok(parsed.unwrap_or_default())
}

/// Replace whole exchange maps in `table` with the ones from `overrides`
///
/// Pairs are never unioned: an exchange named in the override keeps only the
/// pairs listed there.
pub fn merge_exchange_symbols(
    mut table: ExchangeSymbolTable,
    overrides: SymbolsOverride,
) -> Result<ExchangeSymbolTable> {
    for (exchange, symbols) in overrides {
        if !sources::is_known_source(&exchange) {
            warn!(exchange = %exchange, "Symbol override for unrecognized datasource");
        }

        let symbols = symbols.unwrap_or_default();
        let mut symbol_map = ExchangeSymbolMap::with_capacity(symbols.len());
        for (pair, symbol) in symbols {
            let asset_pair: AssetPair = match pair.parse() {
                Ok(p) => p,
                Err(source) => {
                    return Err(ConfigError::InvalidPair {
                        exchange,
                        pair,
                        source,
                    })
                }
            };
            symbol_map.insert(asset_pair, Symbol::from(symbol));
        }

        debug!(exchange = %exchange, pairs = symbol_map.len(), "Applied symbol override");
        table.insert(exchange, symbol_map);
    }

    Ok(table)
}

/// Unset or empty yields an empty map
fn parse_datasource_config(json: &str) -> Result<DataSourceConfigMap> {
    if json.is_empty() {
        return Ok(DataSourceConfigMap::new());
    }

    let parsed: Option<HashMap<String, Box<RawValue>>> =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            var: DATASOURCE_CONFIG_MAP,
            source,
        })?;
    Ok(parsed.unwrap_or_default())
}

/// Best effort: an address that does not decode is dropped, not reported as
/// an error
fn parse_validator_address(value: &str) -> Option<ValAddress> {
    if value.is_empty() {
        return None;
    }

    match ValAddress::from_bech32(value) {
        Ok(addr) => Some(addr),
        Err(e) => {
            warn!(error = %e, "Ignoring invalid {}", VALIDATOR_ADDRESS);
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
