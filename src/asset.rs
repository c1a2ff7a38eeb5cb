//! Asset pair and exchange ticker types
//!
//! An `AssetPair` is the chain-side identifier of a tracked market, written
//! `base:quote` (e.g. `ubtc:uusd`). A `Symbol` is whatever label a particular
//! exchange uses for that market (e.g. `tBTCUSD`) and is never interpreted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const PAIR_SEPARATOR: char = ':';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("pair separator missing for pair name, {0}")]
    MissingSeparator(String),

    #[error("pair name {pair} must have exactly two assets, not {count}")]
    WrongAssetCount { pair: String, count: usize },

    #[error("empty token identifiers are not allowed. token0: {base}, token1: {quote}.")]
    EmptyAsset { base: String, quote: String },
}

// ============================================================================
// AssetPair
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPair {
    base: String,
    quote: String,
}

impl AssetPair {
    /// Build a pair from its two assets; neither may be empty
    pub fn new(base: &str, quote: &str) -> Result<Self, PairError> {
        if base.is_empty() || quote.is_empty() {
            return Err(PairError::EmptyAsset {
                base: base.to_string(),
                quote: quote.to_string(),
            });
        }
        Ok(Self::from_parts(base, quote))
    }

    /// Only for compiled-in constants; covered by the defaults tests
    pub(crate) fn from_parts(base: &str, quote: &str) -> Self {
        Self {
            base: base.to_string(),
            quote: quote.to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }
}

impl FromStr for AssetPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(PAIR_SEPARATOR).collect();
        match parts.as_slice() {
            [base, quote] => AssetPair::new(base, quote),
            [_] => Err(PairError::MissingSeparator(s.to_string())),
            _ => Err(PairError::WrongAssetCount {
                pair: s.to_string(),
                count: parts.len(),
            }),
        }
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, PAIR_SEPARATOR, self.quote)
    }
}

impl Serialize for AssetPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssetPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Symbol
// ============================================================================

/// Exchange-specific ticker for a pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
