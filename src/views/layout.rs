//! Layout chrome shared by every page

use chrono::{DateTime, Utc};
use tera::Context;

use crate::config::SiteConfig;
use crate::helpers::{copyright_year, render_meta_tags, MetaTag};
use crate::templates::{CopyrightData, NavItem, SiteData, SocialLink};

/// Navigation entries, in display order
const NAV_LINKS: [(&str, &str); 3] = [("Home", "/"), ("About", "/about"), ("Blog", "/blog")];

/// Request-scoped inputs to a render
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Current route path, used to mark the active nav link
    pub path: String,
    /// Time of the request, used for the footer year
    pub now: DateTime<Utc>,
}

impl RenderContext {
    pub fn new(path: &str, now: DateTime<Utc>) -> Self {
        Self {
            path: path.to_string(),
            now,
        }
    }
}

/// Whether `target` is the active nav entry for `current`. The root is only
/// active on an exact match; other targets also match their sub-paths.
pub fn is_active(current: &str, target: &str) -> bool {
    if target == "/" {
        return current == "/";
    }

    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// The three nav links with the active one marked
pub fn nav_items(current: &str) -> Vec<NavItem> {
    NAV_LINKS
        .iter()
        .map(|(label, href)| NavItem {
            label: label.to_string(),
            href: href.to_string(),
            active: is_active(current, href),
        })
        .collect()
}

fn social_links(config: &SiteConfig) -> Vec<SocialLink> {
    let social = &config.social;
    [
        ("GitHub", "github", &social.github),
        ("Twitter", "twitter", &social.twitter),
        ("RSS", "rss", &social.rss),
    ]
    .into_iter()
    .filter_map(|(label, icon, href)| {
        href.as_ref().map(|href| SocialLink {
            label: label.to_string(),
            href: href.clone(),
            icon: icon.to_string(),
        })
    })
    .collect()
}

/// Template context with the layout's variables filled in
pub fn layout_context(config: &SiteConfig, ctx: &RenderContext, head: &[MetaTag]) -> Context {
    let mut context = Context::new();

    context.insert(
        "site",
        &SiteData {
            title: config.title.clone(),
            application_name: config.application_name.clone(),
            theme_color: config.theme_color.clone(),
            tile_color: config.tile_color.clone(),
            language: config.language.clone(),
        },
    );
    context.insert("head_tags", &render_meta_tags(head));
    context.insert("nav", &nav_items(&ctx.path));
    context.insert("social", &social_links(config));
    context.insert(
        "copyright",
        &CopyrightData {
            holder: config.copyright_holder().to_string(),
            year: copyright_year(&ctx.now),
        },
    );

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<String> {
        nav_items(path)
            .into_iter()
            .filter(|item| item.active)
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn test_nav_has_three_links() {
        let labels: Vec<_> = nav_items("/").into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Blog"]);
    }

    #[test]
    fn test_only_home_active_on_root() {
        assert_eq!(active_labels("/"), vec!["Home"]);
    }

    #[test]
    fn test_only_blog_active_on_blog() {
        assert_eq!(active_labels("/blog"), vec!["Blog"]);
        assert_eq!(active_labels("/blog/hello-world"), vec!["Blog"]);
    }

    #[test]
    fn test_prefix_without_separator_is_not_active() {
        assert!(!is_active("/blogroll", "/blog"));
        assert!(active_labels("/missing").is_empty());
    }

    #[test]
    fn test_social_links_only_when_configured() {
        let mut config = SiteConfig::default();
        assert!(social_links(&config).is_empty());

        config.social.rss = Some("/rss.xml".to_string());
        let links = social_links(&config);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].icon, "rss");
    }
}
