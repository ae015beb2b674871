//! Listing transform hooks.
//!
//! Plugins can adjust the color listing before it reaches the caller. A
//! transform receives the listing built so far and returns the listing to
//! pass on — adding, removing, or reordering entries as it sees fit. The
//! catalog applies transforms in registration order and never exposes the
//! underlying registry to them.

use crate::types::ColorListing;

/// Event name under which the color listing is offered to transforms.
pub const COLOR_LIST_EVENT: &str = "color:get-list";

/// A transform applied to the color listing before it is returned.
pub type ListTransform = Box<dyn Fn(ColorListing) -> ColorListing + Send + Sync>;
