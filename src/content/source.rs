//! The content source seam

use async_trait::async_trait;
use thiserror::Error;

use super::{PostDetail, PostSummary};

/// Errors raised while reading content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid front-matter: {0}")]
    FrontMatter(String),

    #[error("malformed post {slug:?}: {reason}")]
    Malformed { slug: String, reason: String },
}

/// Provider of post summaries and full posts, keyed by slug
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError>;

    /// A single post, or `None` when no post has this slug
    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError>;
}

/// Sort summaries newest first. Entries with unparsable dates sink to the end
/// and are rejected later by listing validation.
pub(crate) fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
}
