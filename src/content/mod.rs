//! Content module - post loading, front matter and rendering

pub mod error;
pub mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod reading_time;
pub mod seed;

pub use error::{ContentError, FrontMatterError};
pub use frontmatter::Metadata;
pub use loader::{ContentStore, SeedOutcome};
pub use markdown::MarkdownRenderer;
pub use post::{categories, group_by_category, CategoryGroup, Post};
