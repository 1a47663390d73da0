//! Helper functions shared by the views
//!
//! Small, pure functions for dates, URLs, escaping and head metadata.

mod date;
mod html;
mod meta;
mod url;

pub use date::*;
pub use html::*;
pub use meta::*;
pub use url::*;
