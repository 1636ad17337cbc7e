//! Identifier (slug) derivation

/// Convert a display name to a filesystem-safe identifier.
///
/// Lower-cases the name, collapses every run of characters outside
/// `[a-z0-9]` into a single `_`, and trims underscores from both ends.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
