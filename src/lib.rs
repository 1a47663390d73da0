//! site-rs: a server-rendered personal blog
//!
//! Posts come from a [`content::ContentSource`] (a GitHub repository or a
//! local directory), are loaded per route by [`loader`], and rendered with
//! embedded Tera templates by [`views`].

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod routes;
pub mod server;
pub mod templates;
pub mod views;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{SiteConfig, SourceKind};
use content::{ContentSource, GitHubSource, LocalSource};
use error::{ErrorPage, NavigationError, PageError};
use routes::Route;
use helpers::normalize_path;
use views::{RenderContext, Views};

/// Minimal page used when even the error template cannot be rendered
pub const FALLBACK_ERROR_HTML: &str = "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Internal server error</title></head><body><h1>500 Internal server error</h1></body></html>";

/// A rendered response body with its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

/// The site: configuration, content source and views
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: Arc<SiteConfig>,
    /// Public (static assets) directory
    pub public_dir: PathBuf,
    source: Arc<dyn ContentSource>,
    views: Arc<Views>,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            SiteConfig::default()
        };

        let source: Arc<dyn ContentSource> = match config.content.source {
            SourceKind::Local => {
                let dir = base_dir.join(&config.content.local.dir);
                tracing::info!("Reading posts from {:?}", dir);
                Arc::new(LocalSource::new(dir))
            }
            SourceKind::GitHub => {
                let github = &config.content.github;
                if github.owner.is_empty() || github.repo.is_empty() {
                    anyhow::bail!("content.github.owner and content.github.repo must be set");
                }
                tracing::info!(
                    "Reading posts from github.com/{}/{} ({})",
                    github.owner,
                    github.repo,
                    github.dir
                );
                Arc::new(GitHubSource::new(github)?)
            }
        };

        Self::with_source(config, base_dir, source)
    }

    /// Create a site with an explicit content source
    pub fn with_source<P: AsRef<Path>>(
        config: SiteConfig,
        base_dir: P,
        source: Arc<dyn ContentSource>,
    ) -> Result<Self> {
        let public_dir = base_dir.as_ref().join(&config.public_dir);
        let views = Views::new(config.clone()).context("Failed to load templates")?;

        Ok(Self {
            config: Arc::new(config),
            public_dir,
            source,
            views: Arc::new(views),
        })
    }

    /// The content source backing the blog
    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    /// Load a route's data and render its page
    pub async fn render_route(
        &self,
        route: &Route,
        ctx: &RenderContext,
    ) -> Result<String, PageError> {
        match route {
            Route::Home => self.views.home(ctx),
            Route::About => self.views.about(ctx),
            Route::BlogIndex => {
                let data = loader::load_blog_index(self.source()).await?;
                self.views.blog_index(&data, ctx)
            }
            Route::Post(slug) => {
                let data = loader::load_post(self.source(), slug).await?;
                self.views.post(&data, ctx)
            }
            Route::NotFound => Err(NavigationError::not_found().into()),
        }
    }

    /// Answer a request path. Trailing slashes are trimmed before routing,
    /// so `/blog/` is the blog index with Blog marked active.
    pub async fn respond(&self, path: &str, now: DateTime<Utc>) -> RenderedPage {
        let path = normalize_path(path);
        let route = Route::parse(&path);
        self.respond_route(route, RenderContext::new(&path, now)).await
    }

    /// Render a route on its own task. A panic while loading or rendering
    /// becomes the internal error page.
    pub async fn respond_route(&self, route: Route, ctx: RenderContext) -> RenderedPage {
        let site = self.clone();
        let task_ctx = ctx.clone();
        let task = tokio::spawn(async move { site.render(&route, &task_ctx).await });

        match task.await {
            Ok(page) => page,
            Err(err) => {
                if err.is_panic() {
                    let payload = err.into_panic();
                    tracing::error!(
                        "{} -> render panicked: {}",
                        ctx.path,
                        error::panic_message(payload.as_ref())
                    );
                } else {
                    tracing::error!("{} -> render task failed: {}", ctx.path, err);
                }
                self.render_error(&ErrorPage::InternalError, &ctx)
            }
        }
    }

    /// Render a route, presenting any failure as an error page
    pub async fn render(&self, route: &Route, ctx: &RenderContext) -> RenderedPage {
        match self.render_route(route, ctx).await {
            Ok(html) => RenderedPage {
                status: StatusCode::OK,
                html,
            },
            Err(err) => {
                error::report(&err, &ctx.path);
                self.render_error(&ErrorPage::from_error(&err), ctx)
            }
        }
    }

    fn render_error(&self, page: &ErrorPage, ctx: &RenderContext) -> RenderedPage {
        match self.views.error(page, ctx) {
            Ok(html) => RenderedPage {
                status: page.status(),
                html,
            },
            Err(err) => {
                tracing::error!("{} -> error page failed to render: {:#}", ctx.path, err);
                RenderedPage {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    html: FALLBACK_ERROR_HTML.to_string(),
                }
            }
        }
    }
}
