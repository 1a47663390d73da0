//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::{format_post_date, html_escape};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();

        // Escaping is explicit through the `escape_html` filter so that
        // paths and pre-rendered markup are emitted untouched
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("about.html", include_str!("site/about.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("error.html", include_str!("site/error.html")),
            // Partials
            ("partials/head.html", include_str!("site/partials/head.html")),
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("escape_html", escape_html_filter);
        tera.register_filter("long_date", long_date_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Tera filter: escape HTML special characters
fn escape_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_html", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Tera filter: format an ISO-8601 date like "January 1, 2022"
fn long_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("long_date", "value", String, value);
    format_post_date(&s)
        .map(tera::Value::String)
        .ok_or_else(|| tera::Error::msg(format!("Filter `long_date` got invalid date {:?}", s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub application_name: String,
    pub theme_color: String,
    pub tile_color: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyrightData {
    pub holder: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyData {
    pub heading: String,
    pub intro: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_escape_html_filter() {
        let value = tera::Value::String("<b>&</b>".to_string());
        let escaped = escape_html_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(escaped, tera::Value::String("&lt;b&gt;&amp;&lt;/b&gt;".to_string()));
    }

    #[test]
    fn test_long_date_filter() {
        let value = tera::Value::String("2022-01-01".to_string());
        let formatted = long_date_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(formatted, tera::Value::String("January 1, 2022".to_string()));

        let invalid = tera::Value::String("tomorrow".to_string());
        assert!(long_date_filter(&invalid, &HashMap::new()).is_err());
    }
}
