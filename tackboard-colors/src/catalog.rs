//! ColorCatalog — main API surface for board colors.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::defaults::{builtin_colors, DEFAULT_COLOR_ID, DEFAULT_COLOR_SETTING};
use crate::hooks::{ListTransform, COLOR_LIST_EVENT};
use crate::localize::{IdentityLocalizer, Localizer};
use crate::registry::ColorRegistry;
use crate::settings::SettingsStore;
use crate::types::{ColorDefinition, ColorListing};

/// Single source of truth for the set of selectable board colors.
///
/// Translates between user input, persisted color ids, and render-ready
/// values. The registry is fixed at construction and every read is total:
/// unknown ids degrade to the default color rather than erroring.
pub struct ColorCatalog {
    registry: ColorRegistry,
    settings: Arc<dyn SettingsStore>,
    localizer: Arc<dyn Localizer>,
    list_transforms: Vec<ListTransform>,
}

impl ColorCatalog {
    /// Catalog over the built-in sixteen-color palette.
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self::with_registry(builtin_colors(), settings)
    }

    /// Catalog over a custom registry.
    pub fn with_registry(registry: ColorRegistry, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            registry,
            settings,
            localizer: Arc::new(IdentityLocalizer),
            list_transforms: Vec::new(),
        }
    }

    /// Replace the localizer used for listing display names.
    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Register a transform applied to every listing built by [`list`].
    ///
    /// Transforms run in registration order, each receiving the previous
    /// result.
    ///
    /// [`list`]: ColorCatalog::list
    pub fn on_list<F>(mut self, transform: F) -> Self
    where
        F: Fn(ColorListing) -> ColorListing + Send + Sync + 'static,
    {
        self.list_transforms.push(Box::new(transform));
        self
    }

    /// Resolve user input (id or display name, any casing) to a canonical
    /// id. `None` means "not found" and is not an error.
    pub fn find(&self, input: &str) -> Option<&str> {
        trace!(input, "resolving color");
        self.registry.find(input)
    }

    /// Properties for `id`, or the default color's when `id` is unknown.
    ///
    /// Never fails. When the configured default is itself unknown (a
    /// corrupted setting), resolution falls back to the built-in default id
    /// and finally to the first registry entry.
    pub fn color_properties(&self, id: &str) -> &ColorDefinition {
        if let Some(def) = self.registry.get(id) {
            return def;
        }

        let default_id = self.default_color();
        if let Some(def) = self.registry.get(&default_id) {
            debug!(requested = id, default = %default_id, "unknown color id, using default");
            return def;
        }

        debug!(configured = %default_id, "configured default color not in registry");
        self.registry
            .get(DEFAULT_COLOR_ID)
            .unwrap_or_else(|| self.registry.first())
    }

    /// Ordered id → localized display name listing for a `<select>` control.
    ///
    /// With `prepend_all`, a synthetic empty-string entry labeled "All
    /// colors" comes first. Registered listing transforms are applied after
    /// the canonical listing is built, so the returned mapping may differ
    /// from the registry.
    pub fn list(&self, prepend_all: bool) -> ColorListing {
        let mut listing = ColorListing::new();

        if prepend_all {
            listing.insert(String::new(), self.localizer.translate("All colors"));
        }

        for (id, def) in self.registry.iter() {
            listing.insert(id.to_string(), self.localizer.translate(&def.name));
        }

        if !self.list_transforms.is_empty() {
            debug!(
                event = COLOR_LIST_EVENT,
                transforms = self.list_transforms.len(),
                "applying listing transforms"
            );
            for transform in &self.list_transforms {
                listing = transform(listing);
            }
        }

        listing
    }

    /// The configured default color id, `"yellow"` when unset.
    ///
    /// The setting is returned verbatim; a configured id that is missing
    /// from the registry is handled by [`color_properties`], not here.
    ///
    /// [`color_properties`]: ColorCatalog::color_properties
    pub fn default_color(&self) -> String {
        self.settings.get(DEFAULT_COLOR_SETTING, DEFAULT_COLOR_ID)
    }

    /// The full registry, unmodified, for introspection and admin screens.
    pub fn default_colors(&self) -> &ColorRegistry {
        &self.registry
    }

    /// Background color literal for `id`, defaulted like [`color_properties`].
    ///
    /// [`color_properties`]: ColorCatalog::color_properties
    pub fn background_color(&self, id: &str) -> &str {
        &self.color_properties(id).background
    }

    /// Border color literal for `id`, defaulted like [`color_properties`].
    ///
    /// [`color_properties`]: ColorCatalog::color_properties
    pub fn border_color(&self, id: &str) -> &str {
        &self.color_properties(id).border
    }

    /// CSS stylesheet covering every color, in registry order.
    pub fn css(&self) -> String {
        self.registry.css()
    }
}
