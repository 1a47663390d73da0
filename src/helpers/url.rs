//! URL helper functions

use crate::config::SiteConfig;

/// Generate a full URL including the site origin
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog") // -> "https://example.com/blog"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    format!("{}/{}", base, path)
}

/// Normalize a request path: leading slash, no trailing slash except for root
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
