//! Settings store seam.
//!
//! The catalog reads its configured default color through this trait rather
//! than through a global configuration object, so callers decide where
//! settings live and tests can inject a fake store.

use std::collections::HashMap;

/// Key/value configuration with caller-supplied defaults.
pub trait SettingsStore: Send + Sync {
    /// Fetch the value for `key`, or `default` when unset.
    fn get(&self, key: &str, default: &str) -> String;
}

/// In-memory settings store for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set a value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
