//! Page views
//!
//! Each view turns a loader payload into a full HTML document inside the
//! shared layout. Views only borrow the payload.

mod layout;

pub use layout::{is_active, nav_items, RenderContext};

use crate::config::SiteConfig;
use crate::content::MarkdownRenderer;
use crate::error::{ErrorPage, PageError};
use crate::helpers::{default_meta_descriptor, generate_meta_descriptor, MetaTag, PageMeta};
use crate::loader::{BlogIndexData, PostData};
use crate::templates::{CopyData, TemplateRenderer};
use layout::layout_context;

/// Renders every page of the site
pub struct Views {
    config: SiteConfig,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Views {
    pub fn new(config: SiteConfig) -> Result<Self, PageError> {
        let templates = TemplateRenderer::new()?;
        let markdown = MarkdownRenderer::with_theme(&config.highlight_theme);

        Ok(Self {
            config,
            templates,
            markdown,
        })
    }

    /// Home page
    pub fn home(&self, ctx: &RenderContext) -> Result<String, PageError> {
        let head = default_meta_descriptor(&self.config);
        let mut context = layout_context(&self.config, ctx, &head);
        context.insert(
            "home",
            &CopyData {
                heading: self.config.home.heading.clone(),
                intro: self.config.home.intro.clone(),
            },
        );

        Ok(self.templates.render("home.html", &context)?)
    }

    /// About page; its copy is markdown from the configuration
    pub fn about(&self, ctx: &RenderContext) -> Result<String, PageError> {
        let head = default_meta_descriptor(&self.config);
        let mut context = layout_context(&self.config, ctx, &head);
        context.insert(
            "about",
            &CopyData {
                heading: self.config.about.heading.clone(),
                intro: String::new(),
            },
        );
        context.insert("body", &self.markdown.render(&self.config.about.content));

        Ok(self.templates.render("about.html", &context)?)
    }

    /// Blog index: one entry per post, in the order received
    pub fn blog_index(&self, data: &BlogIndexData, ctx: &RenderContext) -> Result<String, PageError> {
        let blog = &self.config.blog;
        let head = generate_meta_descriptor(
            &self.config,
            &PageMeta::new(&blog.title, &blog.description, "/blog"),
        );

        let mut context = layout_context(&self.config, ctx, &head);
        context.insert(
            "blog",
            &CopyData {
                heading: blog.heading.clone(),
                intro: blog.intro.clone(),
            },
        );
        context.insert("posts", &data.posts);

        Ok(self.templates.render("blog.html", &context)?)
    }

    /// A single post with its markdown body rendered
    pub fn post(&self, data: &PostData, ctx: &RenderContext) -> Result<String, PageError> {
        let summary = &data.post.summary;
        let head = generate_meta_descriptor(
            &self.config,
            &PageMeta::new(&summary.title, &summary.description, &summary.path()),
        );

        let mut context = layout_context(&self.config, ctx, &head);
        context.insert("post", &data.post);
        context.insert("body", &self.markdown.render(&data.post.content));

        Ok(self.templates.render("post.html", &context)?)
    }

    /// Fallback page for a failed navigation. Never includes error details.
    pub fn error(&self, page: &ErrorPage, ctx: &RenderContext) -> Result<String, PageError> {
        let mut head = default_meta_descriptor(&self.config);
        head[0] = MetaTag::Title {
            content: page.title().to_string(),
        };

        let mut context = layout_context(&self.config, ctx, &head);
        context.insert("message", &page.message());

        Ok(self.templates.render("error.html", &context)?)
    }
}
