//! Configuration
//!
//! Sources, later ones winning: built-in defaults, an optional JSON file,
//! environment variables. Command-line flags are applied by the binary on
//! top of the result.

use quickconvert_core::{DEFAULT_SIG_FIGS, MAX_SIG_FIGS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Significant figures for displayed results
pub const PRECISION_ENV: &str = "QUICKCONVERT_PRECISION";

/// Default log filter when `RUST_LOG` is unset
pub const LOG_ENV: &str = "QUICKCONVERT_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Significant figures for displayed results (1..=17)
    pub precision: usize,
    /// Log filter directive, e.g. "warn" or "quickconvert=debug"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_SIG_FIGS,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    /// Overlay variables found through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PRECISION_ENV) {
            let precision = value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidEnv {
                var: PRECISION_ENV,
                value: value.clone(),
            })?;
            self.precision = precision;
        }
        if let Some(value) = lookup(LOG_ENV) {
            if !value.trim().is_empty() {
                self.log_level = value.trim().to_string();
            }
        }
        self.precision = self.precision.clamp(1, MAX_SIG_FIGS);
        Ok(())
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.precision = self.precision.clamp(1, MAX_SIG_FIGS);
        self
    }
}
