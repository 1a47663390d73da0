//! Fixed, in-memory posts

use async_trait::async_trait;

use super::{ContentError, ContentSource, PostDetail, PostSummary};

/// Serves a fixed list of posts in the order given
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    posts: Vec<PostDetail>,
}

impl MemorySource {
    pub fn new(posts: Vec<PostDetail>) -> Self {
        Self { posts }
    }

    /// Build from summaries alone, with empty bodies
    pub fn from_summaries(summaries: Vec<PostSummary>) -> Self {
        Self::new(
            summaries
                .into_iter()
                .map(|summary| PostDetail::new(summary, String::new()))
                .collect(),
        )
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        Ok(self.posts.iter().map(|p| p.summary.clone()).collect())
    }

    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError> {
        Ok(self.posts.iter().find(|p| p.slug() == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keeps_given_order() {
        let source = MemorySource::from_summaries(vec![
            PostSummary::new("b", "B", "2021-01-01", ""),
            PostSummary::new("a", "A", "2022-01-01", ""),
        ]);
        let slugs: Vec<_> = source
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["b", "a"]);
        assert!(source.get_post("a").await.unwrap().is_some());
        assert!(source.get_post("c").await.unwrap().is_none());
    }
}
