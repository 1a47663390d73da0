//! Site routes

use crate::helpers::normalize_path;

/// A page of the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    BlogIndex,
    Post(String),
    NotFound,
}

impl Route {
    /// Match a request path
    pub fn parse(path: &str) -> Self {
        let path = normalize_path(path);
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match segments.as_slice() {
            [""] => Route::Home,
            ["about"] => Route::About,
            ["blog"] => Route::BlogIndex,
            ["blog", slug] => Route::Post(slug.to_string()),
            _ => Route::NotFound,
        }
    }
}
