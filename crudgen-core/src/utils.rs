//! Shared string helpers.

/// Lowercase form used for file names, URL segments, collection names and tags.
///
/// Both the template filter and the output path builder go through this
/// function so the two never disagree.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}
