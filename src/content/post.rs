//! Post models

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ContentError;

/// Summary of a blog post as listed on the blog index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// URL-safe identifier, unique across all posts
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date (ISO-8601)
    pub date: String,

    /// Short description shown on the index and in meta tags
    pub description: String,
}

/// A full blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,

    /// Raw markdown body
    pub content: String,
}

impl PostSummary {
    /// Create a new summary
    pub fn new(slug: &str, title: &str, date: &str, description: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        }
    }

    /// Path of the post detail route
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Publication date parsed as a calendar date
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Check that the slug is URL-safe and the date is a valid ISO-8601 date
    pub fn validate(&self) -> Result<(), ContentError> {
        if !is_valid_slug(&self.slug) {
            return Err(ContentError::Malformed {
                slug: self.slug.clone(),
                reason: "slug is not URL-safe".to_string(),
            });
        }

        if self.published_on().is_none() {
            return Err(ContentError::Malformed {
                slug: self.slug.clone(),
                reason: format!("invalid date {:?}", self.date),
            });
        }

        Ok(())
    }
}

impl PostDetail {
    pub fn new(summary: PostSummary, content: String) -> Self {
        Self { summary, content }
    }

    pub fn slug(&self) -> &str {
        &self.summary.slug
    }
}

/// Validate a listing: every entry well formed and no slug listed twice
pub fn validate_listing(posts: &[PostSummary]) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(posts.len());

    for post in posts {
        post.validate()?;
        if !seen.insert(post.slug.as_str()) {
            return Err(ContentError::Malformed {
                slug: post.slug.clone(),
                reason: "duplicate slug".to_string(),
            });
        }
    }

    Ok(())
}

/// A slug is non-empty ASCII alphanumerics, `-` and `_`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into its calendar date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}
