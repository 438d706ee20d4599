//! Mapping from free-text sheet labels to the frontend's display categories.

/// Ordered `(alias, canonical)` pairs. The first alias found anywhere in a
/// label (case-insensitive) decides its category, so more specific aliases
/// must come before broader ones that would also match.
pub const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("Area Light", "Area Light"),
    ("AL2", "Area Light"),
    ("AL2N", "Area Light"),
    ("Twin Lens High Bay", "Linear High Bay"),
    ("Limited Stock - Linear High Bay", "Linear High Bay"),
    ("Limited Stock - High Bay - Linear Fixtures", "Linear High Bay"),
    ("High Bay - Round Limited Stock", "Round High Bay"),
    ("HBU3 Accessories", "Round High Bay"),
    ("PT-WAA Series -", "Wraparound"),
    ("Limited Stock Strip Light", "Strip Light"),
    ("LSFA", "Strip Light"),
    ("Accessories", "Accessories"),
    ("Limited Stock - Vapor Tight", "Vaportight"),
];

/// Maps a raw category or subcategory label to its canonical display name.
///
/// Returns the label unchanged when no alias matches.
#[must_use]
pub fn map_category(raw_label: &str) -> String {
    let lower = raw_label.to_lowercase();
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| lower.contains(&alias.to_lowercase()))
        .map_or_else(|| raw_label.to_owned(), |(_, canonical)| (*canonical).to_owned())
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
