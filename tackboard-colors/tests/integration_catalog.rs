//! Integration test wiring the catalog to real collaborator implementations

use std::sync::Arc;

use tackboard_colors::{
    builtin_colors, ColorCatalog, MemorySettings, StaticLocalizer, DEFAULT_COLOR_SETTING,
};

#[test]
fn test_catalog_round_trip() {
    let settings = MemorySettings::new().with(DEFAULT_COLOR_SETTING, "teal");
    let localizer = StaticLocalizer::new()
        .with("All colors", "Alle Farben")
        .with("Deep Orange", "Dunkelorange");

    let catalog = ColorCatalog::new(Arc::new(settings))
        .with_localizer(Arc::new(localizer))
        .on_list(|mut listing| {
            listing.insert("rainbow".to_string(), "Rainbow".to_string());
            listing
        });

    // Lookup by id and by name, any casing
    assert_eq!(catalog.find("YELLOW"), Some("yellow"));
    assert_eq!(catalog.find("Dark Grey"), Some("dark_grey"));
    assert_eq!(catalog.find("nonexistent"), None);

    // Configured default drives invalid-id resolution
    assert_eq!(catalog.default_color(), "teal");
    assert_eq!(catalog.background_color("not-a-color"), "#80cbc4");
    assert_eq!(catalog.border_color("not-a-color"), "#00695c");

    // Listing: localized, ordered, transformed
    let listing = catalog.list(true);
    assert_eq!(listing.keys().next().unwrap(), "");
    assert_eq!(listing[""], "Alle Farben");
    assert_eq!(listing["deep_orange"], "Dunkelorange");
    assert!(listing.contains_key("rainbow"));
    assert_eq!(listing.len(), 18);

    // Transforms never touch the registry
    assert_eq!(catalog.default_colors().len(), 16);
}

#[test]
fn test_css_snapshot_is_stable() {
    let catalog = ColorCatalog::new(Arc::new(MemorySettings::new()));
    let first = catalog.css();
    let second = catalog.css();
    assert_eq!(first, second);

    // Two rule blocks per registry entry, each referencing the owning id
    for id in builtin_colors().ids() {
        assert!(first.contains(&format!("div.color-{id} {{")));
        assert!(first.contains(&format!("td.color-{id} {{")));
    }
    assert_eq!(first.matches('}').count(), 2 * builtin_colors().len());
}

#[test]
fn test_listing_serializes_for_json_api() {
    let catalog = ColorCatalog::new(Arc::new(MemorySettings::new()));
    let listing = catalog.list(false);
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["yellow"], "Yellow");
    assert_eq!(json["deep_orange"], "Deep Orange");
}
