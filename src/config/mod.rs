//! Configuration module

mod site;

pub use site::AboutConfig;
pub use site::BlogConfig;
pub use site::ContentConfig;
pub use site::GitHubSourceConfig;
pub use site::HomeConfig;
pub use site::LocalSourceConfig;
pub use site::SiteConfig;
pub use site::SocialConfig;
pub use site::SourceKind;
