//! Bridge configuration with documented defaults.
//!
//! The JS host may pass a partial JSON object at mount time; any field it
//! leaves out keeps the default below.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// `localStorage` key holding the current word.
pub const DEFAULT_STORAGE_KEY: &str = "word_bump_word";
pub const DEFAULT_LOCATION_TIMEOUT_MS: u32 = 10_000;
/// Cached positions younger than five minutes are acceptable.
pub const DEFAULT_LOCATION_MAXIMUM_AGE_MS: u32 = 300_000;

/// Options for a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: DEFAULT_LOCATION_TIMEOUT_MS,
            maximum_age_ms: DEFAULT_LOCATION_MAXIMUM_AGE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub storage_key: String,
    pub position: PositionOptions,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), position: PositionOptions::default() }
    }
}

impl BridgeConfig {
    /// Parse a (possibly partial) JSON config object.
    ///
    /// Accepted fields:
    /// - `storage_key`: default `"word_bump_word"`
    /// - `position.enable_high_accuracy`: default `true`
    /// - `position.timeout_ms`: default 10000
    /// - `position.maximum_age_ms`: default 300000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
