//! Per-route data loaders
//!
//! Each loader makes exactly one call to the content source and either
//! returns the page payload or fails the navigation.

use crate::content::{is_valid_slug, validate_listing, ContentSource, PostDetail, PostSummary};
use crate::error::{NavigationError, PageError};

/// Payload of the blog index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogIndexData {
    pub posts: Vec<PostSummary>,
}

/// Payload of a post detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostData {
    pub post: PostDetail,
}

/// Load every post summary in the order the source lists them
pub async fn load_blog_index(source: &dyn ContentSource) -> Result<BlogIndexData, PageError> {
    let posts = source.list_posts().await?;
    validate_listing(&posts)?;

    Ok(BlogIndexData { posts })
}

/// Load a single post, failing with 404 when the slug is unknown
pub async fn load_post(source: &dyn ContentSource, slug: &str) -> Result<PostData, PageError> {
    if !is_valid_slug(slug) {
        return Err(NavigationError::not_found().into());
    }

    let post = source
        .get_post(slug)
        .await?
        .ok_or_else(NavigationError::not_found)?;
    post.summary.validate()?;

    Ok(PostData { post })
}
