//! Front-matter parsing for markdown posts

use serde::Deserialize;

use super::{ContentError, PostDetail, PostSummary};

/// Front-matter block at the top of a post file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    /// Overrides the slug derived from the file name
    pub slug: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            // No front-matter found
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Err(ContentError::FrontMatter(
                "missing closing `---` delimiter".to_string(),
            ));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| ContentError::FrontMatter(e.to_string()))?;

        Ok((fm, remaining))
    }
}

/// Build a post from a markdown file, using `stem` (the file name without
/// extension) as the slug unless the front-matter sets one
pub fn parse_post(stem: &str, text: &str) -> Result<PostDetail, ContentError> {
    let (fm, body) = FrontMatter::parse(text)?;

    let slug = fm.slug.unwrap_or_else(|| stem.to_string());
    let title = fm.title.ok_or_else(|| ContentError::Malformed {
        slug: slug.clone(),
        reason: "missing title".to_string(),
    })?;
    let date = fm.date.ok_or_else(|| ContentError::Malformed {
        slug: slug.clone(),
        reason: "missing date".to_string(),
    })?;

    let summary = PostSummary {
        slug,
        title,
        date,
        description: fm.description.unwrap_or_default(),
    };
    summary.validate()?;

    Ok(PostDetail::new(summary, body.to_string()))
}
