//! Core value types for the color catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One selectable board color: display name plus render-ready CSS values.
///
/// `background` and `border` are CSS color literals in either `rgb(r, g, b)`
/// or `#rrggbb` form. They are stored verbatim and never parsed or
/// normalized — the UI embeds them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDefinition {
    /// Human-readable display name, subject to localization.
    pub name: String,
    /// Background color literal.
    pub background: String,
    /// Border color literal.
    pub border: String,
}

impl ColorDefinition {
    pub fn new(
        name: impl Into<String>,
        background: impl Into<String>,
        border: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            background: background.into(),
            border: border.into(),
        }
    }
}

/// Ordered mapping of color id to localized display name, as rendered into
/// a `<select>` control. The empty-string key, when present, is the
/// synthetic "All colors" entry.
pub type ColorListing = IndexMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_roundtrip() {
        let def = ColorDefinition::new("Deep Orange", "#ffab91", "#e64a19");
        let json = serde_json::to_string(&def).unwrap();
        let back: ColorDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }

    #[test]
    fn test_values_kept_verbatim() {
        // Mixed rgb() and hex forms are both legal and must not be rewritten.
        let def = ColorDefinition::new("Yellow", "rgb(245, 247, 196)", "#dfe32d");
        assert_eq!(def.background, "rgb(245, 247, 196)");
        assert_eq!(def.border, "#dfe32d");
    }
}
