//! Render a single route to stdout

use anyhow::Result;
use axum::http::StatusCode;
use chrono::Utc;
use std::io::Write;

use crate::Site;

/// Render `path` through the same pipeline as the server and write the HTML.
/// Returns the status the server would respond with.
pub async fn run(site: &Site, path: &str, out: &mut impl Write) -> Result<StatusCode> {
    let page = site.respond(path, Utc::now()).await;

    out.write_all(page.html.as_bytes())?;
    Ok(page.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{MemorySource, PostSummary};
    use std::sync::Arc;

    fn site() -> Site {
        let source = MemorySource::from_summaries(vec![PostSummary::new(
            "a",
            "A",
            "2022-01-01",
            "d1",
        )]);
        Site::with_source(SiteConfig::default(), ".", Arc::new(source)).unwrap()
    }

    #[tokio::test]
    async fn test_render_blog_index() {
        let mut out = Vec::new();
        let status = run(&site(), "/blog/", &mut out).await.unwrap();
        let html = String::from_utf8(out).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"href="/blog/a""#));
        assert!(html.contains(r#"<a class="nav-link active" href="/blog" aria-current="page">Blog</a>"#));
    }

    #[tokio::test]
    async fn test_render_missing_post() {
        let mut out = Vec::new();
        let status = run(&site(), "/blog/missing", &mut out).await.unwrap();
        let html = String::from_utf8(out).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("404 Not Found"));
    }
}
