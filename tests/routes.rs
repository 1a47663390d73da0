//! End-to-end route tests against the in-process router

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use site_rs::config::SiteConfig;
use site_rs::content::{ContentError, ContentSource, MemorySource, PostDetail, PostSummary};
use site_rs::server::{router, Clock};
use site_rs::Site;
use std::sync::Arc;
use tower::ServiceExt;

struct BrokenSource;

#[async_trait]
impl ContentSource for BrokenSource {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        Err(ContentError::Status {
            status: 503,
            url: "https://api.github.com/repos/secret-owner/private-repo/contents/blog"
                .to_string(),
        })
    }

    async fn get_post(&self, _slug: &str) -> Result<Option<PostDetail>, ContentError> {
        Err(ContentError::FrontMatter("mapping values are not allowed here".to_string()))
    }
}

struct PanickingSource;

#[async_trait]
impl ContentSource for PanickingSource {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        panic!("index corrupted at offset 0xdeadbeef")
    }

    async fn get_post(&self, _slug: &str) -> Result<Option<PostDetail>, ContentError> {
        panic!("index corrupted at offset 0xdeadbeef")
    }
}

fn clock() -> Clock {
    Arc::new(|| Utc.with_ymd_and_hms(2022, 10, 1, 12, 0, 0).unwrap())
}

fn app(source: Arc<dyn ContentSource>) -> axum::Router {
    let mut config = SiteConfig::default();
    config.author = "Edmund Hung".to_string();
    let site = Site::with_source(config, ".", source).unwrap();
    router(site, clock())
}

fn memory_app() -> axum::Router {
    app(Arc::new(MemorySource::new(vec![
        PostDetail::new(
            PostSummary::new("b", "B", "2022-02-01", "d2"),
            "Second post".to_string(),
        ),
        PostDetail::new(
            PostSummary::new("a", "A", "2022-01-01", "d1"),
            "First post".to_string(),
        ),
    ])))
}

async fn get(app: axum::Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn blog_index_lists_posts_in_source_order() {
    let (status, html) = get(memory_app(), "/blog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<article").count(), 2);
    let b = html.find(r#"href="/blog/b""#).unwrap();
    let a = html.find(r#"href="/blog/a""#).unwrap();
    assert!(b < a);
    assert!(html.contains("January 1, 2022"));
    assert!(html.contains("February 1, 2022"));
}

#[tokio::test]
async fn blog_index_marks_only_blog_active() {
    let (_, html) = get(memory_app(), "/blog").await;

    assert!(html.contains(r#"<a class="nav-link active" href="/blog" aria-current="page">Blog</a>"#));
    assert!(html.contains(r#"<a class="nav-link" href="/">Home</a>"#));
    assert!(html.contains(r#"<a class="nav-link" href="/about">About</a>"#));
}

#[tokio::test]
async fn home_marks_only_home_active() {
    let (status, html) = get(memory_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    assert!(html.contains(r#"<a class="nav-link active" href="/" aria-current="page">Home</a>"#));
    assert!(html.contains("All rights reserved &copy; Edmund Hung 2022"));
}

#[tokio::test]
async fn about_page_renders() {
    let (status, html) = get(memory_app(), "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<a class="nav-link active" href="/about" aria-current="page">About</a>"#));
}

#[tokio::test]
async fn post_detail_renders_body() {
    let (status, html) = get(memory_app(), "/blog/a").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p>First post</p>"));
    assert!(html.contains("<title>A</title>"));
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let (status, html) = get(memory_app(), "/blog/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404 Not Found"));
    assert!(!html.contains("<article"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, html) = get(memory_app(), "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404 Not Found"));
}

#[tokio::test]
async fn source_failure_shows_generic_error() {
    let (status, html) = get(app(Arc::new(BrokenSource)), "/blog").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("500 Internal server error"));
    assert!(!html.contains("secret-owner"));
    assert!(!html.contains("503"));
}

#[tokio::test]
async fn malformed_post_shows_generic_error() {
    let (status, html) = get(app(Arc::new(BrokenSource)), "/blog/a").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("500 Internal server error"));
    assert!(!html.contains("mapping values"));
}

#[tokio::test]
async fn malformed_listing_shows_generic_error() {
    let source = MemorySource::from_summaries(vec![PostSummary::new(
        "a",
        "A",
        "first of January",
        "",
    )]);
    let (status, html) = get(app(Arc::new(source)), "/blog").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!html.contains("first of January"));
}

#[tokio::test]
async fn panic_in_source_renders_error_inside_layout() {
    let (status, html) = get(app(Arc::new(PanickingSource)), "/blog").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("500 Internal server error"));
    assert!(html.contains(r#"<a class="nav-link active" href="/blog" aria-current="page">Blog</a>"#));
    assert!(html.contains("All rights reserved &copy; Edmund Hung 2022"));
    assert!(!html.contains("deadbeef"));
}

#[tokio::test]
async fn trailing_slash_matches_blog_index() {
    let (status, html) = get(memory_app(), "/blog/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains(r#"<a class="nav-link active" href="/blog" aria-current="page">Blog</a>"#));
}

#[tokio::test]
async fn trailing_slash_matches_about() {
    let (status, html) = get(memory_app(), "/about/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<a class="nav-link active" href="/about" aria-current="page">About</a>"#));
}

#[tokio::test]
async fn missing_static_file_renders_not_found_page() {
    let (status, html) = get(memory_app(), "/static/missing.css").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404 Not Found"));
    assert!(html.contains("All rights reserved &copy; Edmund Hung 2022"));
}
