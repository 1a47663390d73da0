//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Branding
    pub application_name: String,
    pub theme_color: String,
    pub tile_color: String,

    // Directory
    pub public_dir: String,

    // Markdown
    pub highlight_theme: String,

    // Pages
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub social: SocialConfig,

    // Content
    #[serde(default)]
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: "Personal website and blog.".to_string(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),

            application_name: "My Site".to_string(),
            theme_color: "#383835".to_string(),
            tile_color: "#ebece5".to_string(),

            public_dir: "public".to_string(),

            highlight_theme: "base16-ocean.dark".to_string(),

            home: HomeConfig::default(),
            about: AboutConfig::default(),
            blog: BlogConfig::default(),
            social: SocialConfig::default(),

            content: ContentConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Name shown in the footer copyright line
    pub fn copyright_holder(&self) -> &str {
        if self.author.is_empty() {
            &self.title
        } else {
            &self.author
        }
    }
}

/// Copy for the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub heading: String,
    pub intro: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            heading: "Hello, welcome to my corner of the web.".to_string(),
            intro: "I write about the web platform, tooling and whatever else I'm learning."
                .to_string(),
        }
    }
}

/// Copy for the about page (markdown)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub heading: String,
    pub content: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            heading: "About".to_string(),
            content: String::new(),
        }
    }
}

/// Blog index copy and meta
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// `<title>` of the blog index
    pub title: String,
    /// Meta description of the blog index
    pub description: String,
    pub heading: String,
    pub intro: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: "All of my thoughts, collected in chronological order.".to_string(),
            heading: "Writing on the web, tooling and more.".to_string(),
            intro: "All of my thoughts on web development, practice, tips and more, collected in chronological order.".to_string(),
        }
    }
}

/// Social links rendered in the navigation bar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub rss: Option<String>,
}

/// Which content source backs the blog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Local,
    #[serde(rename = "github")]
    GitHub,
}

/// Content source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: SourceKind,
    #[serde(default)]
    pub local: LocalSourceConfig,
    #[serde(default)]
    pub github: GitHubSourceConfig,
}

/// Posts read from a directory on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSourceConfig {
    /// Directory relative to the site base directory
    pub dir: String,
}

impl Default for LocalSourceConfig {
    fn default() -> Self {
        Self {
            dir: "posts".to_string(),
        }
    }
}

/// Posts read from a GitHub repository through the contents API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSourceConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory inside the repository holding the markdown posts
    pub dir: String,
    pub api_base: String,
    /// Environment variable holding an access token, if any
    pub token_env: String,
}

impl Default for GitHubSourceConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            branch: "main".to_string(),
            dir: "blog".to_string(),
            api_base: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
        }
    }
}
