//! List posts from the content source

use anyhow::Result;
use std::io::Write;

use crate::loader::load_blog_index;
use crate::Site;

/// Print every post as `date - title [slug]`, newest first
pub async fn run(site: &Site, out: &mut impl Write) -> Result<()> {
    let data = load_blog_index(site.source()).await?;

    writeln!(out, "Posts ({}):", data.posts.len())?;
    for post in &data.posts {
        writeln!(out, "  {} - {} [{}]", post.date, post.title, post.slug)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{MemorySource, PostSummary};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_posts() {
        let source = MemorySource::from_summaries(vec![
            PostSummary::new("b", "Second", "2022-02-01", ""),
            PostSummary::new("a", "First", "2022-01-01", ""),
        ]);
        let site = Site::with_source(SiteConfig::default(), ".", Arc::new(source)).unwrap();

        let mut out = Vec::new();
        run(&site, &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Posts (2):\n  2022-02-01 - Second [b]\n  2022-01-01 - First [a]\n"
        );
    }
}
