//! Localization seam.

use std::collections::HashMap;

/// Translates UI display strings.
///
/// Total by contract: an unknown string passes through unchanged, so the
/// catalog never has to handle a missing translation.
pub trait Localizer: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// No-op localizer; returns every string unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Map-backed localizer for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalizer {
    translations: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a translation, builder style.
    pub fn with(mut self, text: impl Into<String>, translated: impl Into<String>) -> Self {
        self.translations.insert(text.into(), translated.into());
        self
    }
}

impl Localizer for StaticLocalizer {
    fn translate(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
