//! Helper functions for page templates
//!
//! URL building, date display and HTML escaping shared by the templates
//! and the static generator.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
