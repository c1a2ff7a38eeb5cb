//! Environment sources for configuration resolution
//!
//! Resolution reads named string inputs through `EnvSource` so the same code
//! path serves the process environment, a dotenv file, or an in-memory map.
//! Unset and empty variables are treated the same.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `""` when unset
    fn var_or_empty(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Looks up `primary` first and falls back to `fallback`
///
/// Mirrors dotenv semantics: variables already set in the process win over
/// the file.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    pub primary: A,
    pub fallback: B,
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.fallback.var(key))
    }
}

/// Read a dotenv file into a map without touching the process environment
pub fn dotenv_file(path: &Path) -> Result<HashMap<String, String>> {
    let to_err = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = dotenvy::from_path_iter(path).map_err(to_err)?;
    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(to_err)?;
        vars.insert(key, value);
    }
    Ok(vars)
}
