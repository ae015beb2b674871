//! Insertion-ordered registry of color definitions.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ColorsError, Result};
use crate::types::ColorDefinition;

/// Ordered mapping from color id to [`ColorDefinition`].
///
/// Iteration order is authoring order; listings and CSS output both depend
/// on it. A registry is validated once at construction and immutable
/// afterwards: ids are unique lower-case ASCII tokens, every definition has
/// non-empty fields, and the registry itself is never empty. That last
/// invariant is what makes every catalog read total.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ColorRegistry {
    colors: IndexMap<String, ColorDefinition>,
}

impl ColorRegistry {
    /// Build a registry from `(id, definition)` pairs, preserving order.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, ColorDefinition)>,
    {
        let mut colors = IndexMap::new();

        for (id, def) in entries {
            if !is_color_id(&id) {
                return Err(ColorsError::invalid_id(id));
            }
            if def.name.is_empty() {
                return Err(ColorsError::empty_field("name", id));
            }
            if def.background.is_empty() {
                return Err(ColorsError::empty_field("background", id));
            }
            if def.border.is_empty() {
                return Err(ColorsError::empty_field("border", id));
            }
            if colors.insert(id.clone(), def).is_some() {
                return Err(ColorsError::duplicate_id(id));
            }
        }

        if colors.is_empty() {
            return Err(ColorsError::Empty);
        }

        Ok(Self { colors })
    }

    /// Look up a definition by exact id.
    pub fn get(&self, id: &str) -> Option<&ColorDefinition> {
        self.colors.get(id)
    }

    /// Whether `id` is a registered color id.
    pub fn contains(&self, id: &str) -> bool {
        self.colors.contains_key(id)
    }

    /// Number of colors in the registry.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: construction rejects empty registries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// `(id, definition)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorDefinition)> {
        self.colors.iter().map(|(id, def)| (id.as_str(), def))
    }

    /// The first definition in authoring order.
    ///
    /// Last resort of the default-resolution chain when neither the
    /// configured nor the built-in default id is registered.
    pub fn first(&self) -> &ColorDefinition {
        self.colors
            .first()
            .map(|(_, def)| def)
            .expect("registry construction rejects empty registries")
    }

    /// Resolve user input to a canonical id.
    ///
    /// Matching is case-insensitive and runs in two passes over the
    /// authoring order: exact id match first, then display name match.
    /// Returns `None` when nothing matches — an explicit sentinel, not an
    /// error.
    pub fn find(&self, input: &str) -> Option<&str> {
        let folded = input.to_lowercase();

        if let Some((id, _)) = self.colors.get_key_value(folded.as_str()) {
            return Some(id.as_str());
        }

        self.colors
            .iter()
            .find(|(_, def)| def.name.to_lowercase() == folded)
            .map(|(id, _)| id.as_str())
    }

    /// Render the registry as a CSS stylesheet.
    ///
    /// Two rules per color, emitted back-to-back in registry order: a `div`
    /// rule carrying background and border, and a `td` rule carrying only
    /// the background. The exact formatting (spacing included) is part of
    /// the contract — output is byte-identical across runs and snapshot
    /// tested.
    pub fn css(&self) -> String {
        let mut buffer = String::new();

        for (id, def) in &self.colors {
            buffer.push_str(&format!(
                "div.color-{id} {{background-color: {};border-color: {}}}",
                def.background, def.border
            ));
            buffer.push_str(&format!(
                "td.color-{id} {{ background-color: {}}}",
                def.background
            ));
        }

        buffer
    }
}

/// A valid color id: non-empty, lower-case ASCII letters, digits, and
/// underscores only.
fn is_color_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
