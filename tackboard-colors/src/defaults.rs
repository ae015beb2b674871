//! Built-in color palette.
//!
//! `builtin_colors()` provides the sixteen stock board colors in their
//! canonical display order. The mix of `rgb()` and hex literals is
//! intentional — values ship exactly as authored and are embedded verbatim
//! in rendered CSS, so they must never be rewritten to a common form.

use crate::registry::ColorRegistry;
use crate::types::ColorDefinition;

/// Settings key holding the configured default color id.
pub const DEFAULT_COLOR_SETTING: &str = "default_color";

/// Built-in fallback color id when nothing is configured.
pub const DEFAULT_COLOR_ID: &str = "yellow";

/// The sixteen built-in board colors, in display order.
pub fn builtin_colors() -> ColorRegistry {
    let entries = [
        ("yellow", "Yellow", "rgb(245, 247, 196)", "rgb(223, 227, 45)"),
        ("blue", "Blue", "rgb(219, 235, 255)", "rgb(168, 207, 255)"),
        ("green", "Green", "rgb(189, 244, 203)", "rgb(74, 227, 113)"),
        ("purple", "Purple", "rgb(223, 176, 255)", "rgb(205, 133, 254)"),
        ("red", "Red", "rgb(255, 187, 187)", "rgb(255, 151, 151)"),
        ("orange", "Orange", "rgb(255, 215, 179)", "rgb(255, 172, 98)"),
        ("grey", "Grey", "rgb(238, 238, 238)", "rgb(204, 204, 204)"),
        ("brown", "Brown", "#d7ccc8", "#4e342e"),
        ("deep_orange", "Deep Orange", "#ffab91", "#e64a19"),
        ("dark_grey", "Dark Grey", "#cfd8dc", "#455a64"),
        ("pink", "Pink", "#f48fb1", "#d81b60"),
        ("teal", "Teal", "#80cbc4", "#00695c"),
        ("cyan", "Cyan", "#b2ebf2", "#00bcd4"),
        ("lime", "Lime", "#e6ee9c", "#afb42b"),
        ("light_green", "Light Green", "#dcedc8", "#689f38"),
        ("amber", "Amber", "#ffe082", "#ffa000"),
    ];

    ColorRegistry::from_entries(entries.into_iter().map(|(id, name, background, border)| {
        (
            id.to_string(),
            ColorDefinition::new(name, background, border),
        )
    }))
    .expect("built-in palette is valid")
}
