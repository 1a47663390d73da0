//! Posts stored as markdown files in a GitHub repository
//!
//! Files are read through the GitHub REST contents API. Each file in the
//! configured directory is one post, keyed by its file name.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

use super::frontmatter::parse_post;
use super::source::sort_newest_first;
use super::{is_valid_slug, ContentError, ContentSource, PostDetail, PostSummary};
use crate::config::GitHubSourceConfig;

const API_VERSION: &str = "2022-11-28";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";

/// Characters left unescaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// An entry of a contents API directory listing
#[derive(Debug, Clone, Deserialize)]
struct ContentEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

impl ContentEntry {
    fn is_markdown(&self) -> bool {
        self.kind == "file" && self.name.ends_with(".md")
    }

    fn stem(&self) -> &str {
        self.name.trim_end_matches(".md")
    }
}

/// Content source backed by a GitHub repository
pub struct GitHubSource {
    client: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
    branch: String,
    dir: String,
    token: Option<String>,
}

impl GitHubSource {
    /// Create a source from configuration. The token is read from the
    /// environment variable named by `token_env`, when set.
    pub fn new(config: &GitHubSourceConfig) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("site-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let token = if config.token_env.is_empty() {
            None
        } else {
            std::env::var(&config.token_env)
                .ok()
                .filter(|t| !t.is_empty())
        };

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            dir: config.dir.trim_matches('/').to_string(),
            token,
        })
    }

    /// Contents API URL for a repository path
    fn contents_url(&self, path: &str) -> String {
        let path = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| utf8_percent_encode(s, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base,
            utf8_percent_encode(&self.owner, PATH_SEGMENT),
            utf8_percent_encode(&self.repo, PATH_SEGMENT),
            path,
            utf8_percent_encode(&self.branch, NON_ALPHANUMERIC)
        )
    }

    fn post_path(&self, slug: &str) -> String {
        if self.dir.is_empty() {
            format!("{}.md", slug)
        } else {
            format!("{}/{}.md", self.dir, slug)
        }
    }

    fn request(&self, url: &str, accept: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch the raw text of a file, `None` if it does not exist
    async fn fetch_raw(&self, path: &str) -> Result<Option<String>, ContentError> {
        let url = self.contents_url(path);
        tracing::debug!("GET {}", url);

        let response = self.request(&url, RAW_MEDIA_TYPE).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.text().await?)),
            status => Err(ContentError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }

    async fn fetch_listing(&self) -> Result<Vec<ContentEntry>, ContentError> {
        let url = self.contents_url(&self.dir);
        tracing::debug!("GET {}", url);

        let response = self.request(&url, JSON_MEDIA_TYPE).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentSource for GitHubSource {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        let entries = self.fetch_listing().await?;
        let mut posts = Vec::new();

        for entry in entries.iter().filter(|e| e.is_markdown()) {
            let text = self
                .fetch_raw(&entry.path)
                .await?
                .ok_or_else(|| ContentError::Status {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    url: self.contents_url(&entry.path),
                })?;
            posts.push(parse_keyed_post(entry.stem(), &text)?.summary);
        }

        sort_newest_first(&mut posts);
        tracing::debug!(
            "Listed {} posts from {}/{}@{}",
            posts.len(),
            self.owner,
            self.repo,
            self.branch
        );

        Ok(posts)
    }

    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        match self.fetch_raw(&self.post_path(slug)).await? {
            Some(text) => Ok(Some(parse_keyed_post(slug, &text)?)),
            None => Ok(None),
        }
    }
}

/// Parse a post whose slug is always its file name, so listing links and
/// lookups agree
fn parse_keyed_post(stem: &str, text: &str) -> Result<PostDetail, ContentError> {
    let mut post = parse_post(stem, text)?;
    if post.summary.slug != stem {
        tracing::debug!(
            "Ignoring front-matter slug {:?} for {}.md",
            post.summary.slug,
            stem
        );
        post.summary.slug = stem.to_string();
        post.summary.validate()?;
    }
    Ok(post)
}
