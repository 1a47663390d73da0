//! Content module - post models and the sources that supply them

mod frontmatter;
mod github;
mod local;
mod markdown;
mod memory;
mod post;
mod source;

pub use frontmatter::{parse_post, FrontMatter};
pub use github::GitHubSource;
pub use local::LocalSource;
pub use markdown::MarkdownRenderer;
pub use memory::MemorySource;
pub use post::{is_valid_slug, parse_date, validate_listing, PostDetail, PostSummary};
pub use source::{ContentError, ContentSource};
