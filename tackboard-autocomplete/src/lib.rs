//! Auto-complete formatting
//!
//! Adapts entities (groups, users) into the flat records the client-side
//! typeahead widget consumes. Formatting is pure and order-preserving: no
//! filtering, no deduplication, no failure modes.

use serde::{Deserialize, Serialize};

/// Contract for entities offered to the auto-complete widget.
pub trait AutoCompleteSource {
    /// Internal (database) id.
    fn internal_id(&self) -> i64;

    /// Identifier in the external directory the entity was synced from.
    /// Empty when the entity is local-only.
    fn external_id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;
}

/// One row of an auto-complete response.
///
/// `value` and `label` intentionally duplicate the display name: two widget
/// consumers read differently named fields for the same content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCompleteRecord {
    pub id: i64,
    pub external_id: String,
    pub value: String,
    pub label: String,
}

/// Format entities for the ajax auto-completion.
///
/// Output order matches input order, one record per entity.
pub fn format<S: AutoCompleteSource>(items: &[S]) -> Vec<AutoCompleteRecord> {
    items
        .iter()
        .map(|item| AutoCompleteRecord {
            id: item.internal_id(),
            external_id: item.external_id().to_string(),
            value: item.name().to_string(),
            label: item.name().to_string(),
        })
        .collect()
}
