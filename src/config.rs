//! Search configuration
//!
//! Defaults reproduce the document viewer: searches start at two characters,
//! show at most fifty results and wait 150ms after the last keystroke.

use crate::error::AppError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default minimum query length, in characters
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Default number of results returned per query
pub const DEFAULT_RESULT_CAP: usize = 50;

/// Maximum allowed result cap
pub const MAX_RESULT_CAP: usize = 1000;

/// Default quiet period before a typed query runs
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Shorter (trimmed) queries leave the search inactive
    pub min_query_len: usize,
    /// Results beyond this count are dropped
    pub result_cap: usize,
    /// Debounce delay for interactive input
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            result_cap: DEFAULT_RESULT_CAP,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    /// Load a configuration file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: SearchConfig = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.min_query_len == 0 {
            return Err(AppError::InvalidInput(
                "min_query_len must be at least 1".to_string(),
            ));
        }

        if self.result_cap == 0 || self.result_cap > MAX_RESULT_CAP {
            return Err(AppError::InvalidInput(format!(
                "result_cap must be between 1 and {}",
                MAX_RESULT_CAP
            )));
        }

        Ok(())
    }

    /// Override the result cap
    pub fn with_result_cap(mut self, result_cap: usize) -> Self {
        self.result_cap = result_cap;
        self
    }

    /// Override the debounce delay
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
