//! Document head metadata
//!
//! Every route with discoverable content builds its tags from a [`PageMeta`]
//! through [`generate_meta_descriptor`]; other routes use
//! [`default_meta_descriptor`].

use super::html::html_escape;
use super::url::full_url_for;
use crate::config::SiteConfig;

/// Title, description and path of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Path of the page, like `/blog`
    pub url: String,
}

impl PageMeta {
    pub fn new(title: &str, description: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }
}

/// A single tag in the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Title { content: String },
    Name { name: String, content: String },
    Property { property: String, content: String },
    Link { rel: String, href: String },
}

impl MetaTag {
    fn name(name: &str, content: &str) -> Self {
        MetaTag::Name {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    fn property(property: &str, content: &str) -> Self {
        MetaTag::Property {
            property: property.to_string(),
            content: content.to_string(),
        }
    }

    /// Render as an HTML element
    pub fn to_html(&self) -> String {
        match self {
            MetaTag::Title { content } => format!("<title>{}</title>", html_escape(content)),
            MetaTag::Name { name, content } => format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ),
            MetaTag::Property { property, content } => format!(
                r#"<meta property="{}" content="{}">"#,
                html_escape(property),
                html_escape(content)
            ),
            MetaTag::Link { rel, href } => format!(
                r#"<link rel="{}" href="{}">"#,
                html_escape(rel),
                html_escape(href)
            ),
        }
    }
}

/// Build the ordered head tags for a page
pub fn generate_meta_descriptor(config: &SiteConfig, meta: &PageMeta) -> Vec<MetaTag> {
    let url = full_url_for(config, &meta.url);

    vec![
        MetaTag::Title {
            content: meta.title.clone(),
        },
        MetaTag::name("description", &meta.description),
        MetaTag::property("og:type", "website"),
        MetaTag::property("og:title", &meta.title),
        MetaTag::property("og:description", &meta.description),
        MetaTag::property("og:url", &url),
        MetaTag::property("og:site_name", &config.title),
        MetaTag::name("twitter:card", "summary"),
        MetaTag::name("twitter:title", &meta.title),
        MetaTag::name("twitter:description", &meta.description),
        MetaTag::Link {
            rel: "canonical".to_string(),
            href: url,
        },
    ]
}

/// Head tags for routes without their own metadata
pub fn default_meta_descriptor(config: &SiteConfig) -> Vec<MetaTag> {
    vec![
        MetaTag::Title {
            content: config.title.clone(),
        },
        MetaTag::name("description", &config.description),
    ]
}

/// Render tags one per line
pub fn render_meta_tags(tags: &[MetaTag]) -> String {
    tags.iter()
        .map(MetaTag::to_html)
        .collect::<Vec<_>>()
        .join("\n    ")
}
