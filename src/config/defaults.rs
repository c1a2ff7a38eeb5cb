//! Compiled-in exchange symbol table
//!
//! The table is rebuilt on every call so resolution never shares or mutates
//! a global map.

use std::collections::HashMap;

use crate::asset::{AssetPair, Symbol};
use crate::sources;

use super::types::{ExchangeSymbolMap, ExchangeSymbolTable};

type DefaultEntries = &'static [(&'static str, &'static str, &'static str)];

const BITFINEX_SYMBOLS: DefaultEntries = &[
    ("ubtc", "uusd", "tBTCUSD"),
    ("ueth", "uusd", "tETHUSD"),
    ("uusdc", "uusd", "tUDCUSD"),
    ("uusdt", "uusd", "tUSTUSD"),
    ("uatom", "uusd", "tATOUSD"),
];

const GATEIO_SYMBOLS: DefaultEntries = &[
    ("ubtc", "uusd", "BTC_USDT"),
    ("ueth", "uusd", "ETH_USDT"),
    ("uusdc", "uusd", "USDC_USDT"),
    ("uusdt", "uusd", "USDT_USD"),
    ("uatom", "uusd", "ATOM_USDT"),
];

const OKEX_SYMBOLS: DefaultEntries = &[
    ("ubtc", "uusd", "BTC-USDT"),
    ("ueth", "uusd", "ETH-USDT"),
    ("uusdc", "uusd", "USDC-USDT"),
    ("uusdt", "uusd", "USDT-USDC"),
    ("uatom", "uusd", "ATOM-USDT"),
];

fn build(entries: DefaultEntries) -> ExchangeSymbolMap {
    entries
        .iter()
        .map(|(base, quote, symbol)| (AssetPair::from_parts(base, quote), Symbol::from(*symbol)))
        .collect()
}

/// Fresh copy of the default exchange -> pair -> symbol table
pub fn default_exchange_symbols_map() -> ExchangeSymbolTable {
    HashMap::from([
        (sources::BITFINEX.to_string(), build(BITFINEX_SYMBOLS)),
        (sources::GATEIO.to_string(), build(GATEIO_SYMBOLS)),
        (sources::OKEX.to_string(), build(OKEX_SYMBOLS)),
    ])
}
