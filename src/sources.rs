//! Datasource identifiers
//!
//! These are the exchange names used as keys in `EXCHANGE_SYMBOLS_MAP` and
//! `DATASOURCE_CONFIG_MAP`.

pub const BITFINEX: &str = "bitfinex";
pub const GATEIO: &str = "gateio";
pub const OKEX: &str = "okex";
/// Not in the default table: its public API rate limits are too aggressive
pub const COINGECKO: &str = "coingecko";

pub const KNOWN_SOURCES: &[&str] = &[BITFINEX, GATEIO, OKEX, COINGECKO];

pub fn is_known_source(name: &str) -> bool {
    KNOWN_SOURCES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sources() {
        assert!(is_known_source("bitfinex"));
        assert!(is_known_source("coingecko"));
        assert!(!is_known_source("Bitfinex"));
        assert!(!is_known_source("kraken"));
    }
}
