use uuid::Uuid;

use crate::models::{DisplayLocation, PropertyType};

/// The property type an offer should be stored with.
///
/// Offers shown on both the homepage and property pages are always filed
/// under the catalogue's "both" type, overriding whatever type the
/// individually selected property carries. For the other display locations
/// the selection passes through untouched.
pub fn resolve_property_type(
    display_location: DisplayLocation,
    selected: Option<(Uuid, String)>,
    types: &[PropertyType],
) -> Option<(Uuid, String)> {
    match display_location {
        DisplayLocation::Both => types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case("both"))
            .map(|t| (t.id, t.name.clone()))
            .or(selected),
        DisplayLocation::Home | DisplayLocation::Property => selected,
    }
}
