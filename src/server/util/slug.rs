/// Fallback used when a title has no alphanumeric characters.
pub const DEFAULT_SLUG: &str = "campground";

/// Converts a title into a URL-safe slug.
///
/// Lowercases ASCII letters and digits, replaces every other run of characters with a
/// single `-` and trims dashes from both ends.
///
/// # Arguments
/// - `title` - Campground title
///
/// # Returns
/// - `String` - Slug, or [`DEFAULT_SLUG`] if nothing usable remains
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Path segments under `/campgrounds/` that a campground slug must not take.
const RESERVED_SLUGS: [&str; 2] = ["nearby", "favorites"];

/// Whether `slug` would be shadowed by another route: a fixed segment, or an
/// all-digit segment that is looked up as a numeric id.
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug) || slug.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the `n`th candidate for a base slug: the base itself, then `base-2`, `base-3`...
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
