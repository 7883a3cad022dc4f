//! Helper functions for templates and request handling
//!
//! URL building, percent-encoding, HTML escaping and page metadata.

mod html;
mod meta;
mod url;

pub use html::*;
pub use meta::PageMeta;
pub use url::*;
