//! Path and URL construction under the configurable base path.

use axum::http::Uri;
use url::Url;

/// Normalizes a configured base path.
///
/// Ensures a leading slash and strips trailing slashes. The root (`/` or empty) becomes
/// an empty string so that joined paths never start with `//`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Joins a normalized base path and an absolute route path.
pub fn join_path(base_path: &str, path: &str) -> String {
    let joined = format!("{}{}", base_path, path);
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}

/// Absolute URL for the current request with `page` replaced.
///
/// Other query parameters are kept in their original order and `page` is appended.
///
/// # Arguments
/// - `app_url` - Public origin, e.g. `https://example.com`
/// - `uri` - Original request URI including the base path
/// - `page` - Page number to link to
///
/// # Returns
/// - `Some(String)` - Absolute URL
/// - `None` - `app_url` or `uri` could not be combined into a URL
pub fn with_page(app_url: &str, uri: &Uri, page: u64) -> Option<String> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let mut url = Url::parse(app_url).ok()?.join(path_and_query).ok()?;

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("page", &page.to_string());

    Some(url.to_string())
}
