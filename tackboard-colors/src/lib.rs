//! Board color catalog
//!
//! Single source of truth for the selectable board and label colors in the
//! tackboard UI. The catalog resolves user-supplied color identifiers (id or
//! display name, any casing) to canonical ids, supplies the configured
//! default color, builds localized listings for `<select>` controls, and
//! renders the palette as a CSS stylesheet for embedding in a `<style>`
//! block.
//!
//! ## Basic usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tackboard_colors::{ColorCatalog, MemorySettings};
//!
//! let catalog = ColorCatalog::new(Arc::new(MemorySettings::new()));
//!
//! assert_eq!(catalog.find("Deep Orange"), Some("deep_orange"));
//! assert_eq!(catalog.background_color("yellow"), "rgb(245, 247, 196)");
//! assert_eq!(catalog.default_color(), "yellow");
//! ```
//!
//! ## Collaborators
//!
//! Everything the catalog needs from the surrounding application is injected
//! at construction rather than read from global state:
//!
//! - [`SettingsStore`] supplies the configured default color id.
//! - [`Localizer`] translates display names for listings.
//! - [`ColorCatalog::on_list`] registers listing transforms, the extension
//!   point that lets plugins adjust the listing before it is returned.
//!
//! The registry itself is immutable after construction, so a catalog can be
//! shared freely across request handlers.

pub mod catalog;
pub mod defaults;
mod error;
pub mod hooks;
pub mod localize;
pub mod registry;
pub mod settings;
pub mod types;

pub use catalog::ColorCatalog;
pub use defaults::{builtin_colors, DEFAULT_COLOR_ID, DEFAULT_COLOR_SETTING};
pub use error::{ColorsError, Result};
pub use hooks::{ListTransform, COLOR_LIST_EVENT};
pub use localize::{IdentityLocalizer, Localizer, StaticLocalizer};
pub use registry::ColorRegistry;
pub use settings::{MemorySettings, SettingsStore};
pub use types::{ColorDefinition, ColorListing};
