//! Error types for configuration resolution using thiserror
//!
//! Parse and validation failures are recoverable values surfaced to the
//! caller. Only the binary entry point decides to terminate the process.

use std::path::PathBuf;

use thiserror::Error;

use crate::asset::PairError;

/// Required-field check that failed during `Config::validate`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no chain id")]
    NoChainId,

    #[error("no feeder mnemonic")]
    NoFeederMnemonic,

    #[error("no websocket endpoint")]
    NoWebsocketEndpoint,

    #[error("no grpc endpoint")]
    NoGrpcEndpoint,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A JSON-shaped environment variable did not parse
    #[error("failed to parse {var}: invalid json")]
    Parse {
        var: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid asset pair '{pair}' for exchange '{exchange}': {source}")]
    InvalidPair {
        exchange: String,
        pair: String,
        #[source]
        source: PairError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;
