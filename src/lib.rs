//! Price Feeder - configuration core
//!
//! Resolves and validates the runtime configuration of a price feeder that
//! reports exchange prices to the chain's oracle module:
//! - Exchange -> pair -> ticker symbol table (defaults plus overrides)
//! - Opaque per-datasource config blobs
//! - Endpoints, chain id, feeder key and optional validator delegation

pub mod address;
pub mod asset;
pub mod config;
pub mod error;
pub mod sources;

pub use error::ConfigError;
