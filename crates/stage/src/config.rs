//! Stage instance configuration
//!
//! Defines stage instances that can be created through the registry. Each
//! instance has a type and type-specific options. No configuration file is
//! ever read here; configs arrive as parsed TOML values from the embedding
//! application or tests.
//!
//! # Example
//!
//! ```toml
//! [[stages]]
//! type = "transform"
//! fail_on_invalid = true
//!
//! [[stages]]
//! type = "fallback"
//! ```

use serde::Deserialize;
use std::collections::HashMap;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Configuration for a single stage instance
///
/// The type determines which factory builds the stage; the remaining keys
/// are passed through to that factory.
#[derive(Debug, Clone, Deserialize)]
pub struct StageInstanceConfig {
    /// Stage type (e.g., "transform", "fallback")
    #[serde(rename = "type")]
    pub stage_type: String,

    /// Whether this stage is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Type-specific options, passed to the stage factory
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

fn default_true() -> bool {
    true
}

impl StageInstanceConfig {
    /// Create a new transform stage config with defaults
    pub fn transform() -> Self {
        Self {
            stage_type: "transform".to_string(),
            enabled: true,
            options: HashMap::new(),
        }
    }

    /// Create a new fallback stage config
    pub fn fallback() -> Self {
        Self {
            stage_type: "fallback".to_string(),
            enabled: true,
            options: HashMap::new(),
        }
    }

    /// Set an option value (builder-style, for tests and embedders)
    pub fn with_option(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Get an option as bool
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.options.get(key).and_then(|v| v.as_bool())
    }

    /// Get an option as i64
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.options.get(key).and_then(|v| v.as_integer())
    }

    /// Get an option as f64
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.options.get(key).and_then(|v| v.as_float())
    }

    /// Get an option as a string slice
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }
}
