//! Posts loaded from markdown files in a local directory

use async_trait::async_trait;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::parse_post;
use super::source::sort_newest_first;
use super::{is_valid_slug, ContentError, ContentSource, PostDetail, PostSummary};

/// Reads `*.md` posts from a directory on every call
pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Run blocking filesystem work against the posts directory off the
    /// async runtime
    async fn with_dir<T, F>(&self, f: F) -> Result<T, ContentError>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> Result<T, ContentError> + Send + 'static,
    {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || f(&dir))
            .await
            .map_err(io::Error::from)?
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        let mut posts: Vec<PostSummary> = self
            .with_dir(load_all)
            .await?
            .into_iter()
            .map(|post| post.summary)
            .collect();

        sort_newest_first(&mut posts);
        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.dir);

        Ok(posts)
    }

    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        let slug = slug.to_string();
        self.with_dir(move |dir| find_post(dir, &slug)).await
    }
}

/// Load and parse every post in the directory
fn load_all(dir: &Path) -> Result<Vec<PostDetail>, ContentError> {
    if !dir.exists() {
        tracing::warn!("Posts directory {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        if path.is_file() && is_markdown_file(path) {
            posts.push(load_post(path)?);
        }
    }

    Ok(posts)
}

fn find_post(dir: &Path, slug: &str) -> Result<Option<PostDetail>, ContentError> {
    // Fast path: the file name matches the slug
    let direct = dir.join(format!("{}.md", slug));
    if direct.is_file() {
        let post = load_post(&direct)?;
        if post.slug() == slug {
            return Ok(Some(post));
        }
    }

    // Slugs may be overridden in front-matter
    Ok(load_all(dir)?.into_iter().find(|post| post.slug() == slug))
}

fn load_post(path: &Path) -> Result<PostDetail, ContentError> {
    let text = fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    parse_post(stem, &text)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
