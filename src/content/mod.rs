//! Content module - posts from the content API and how their markup is emitted

pub mod client;
mod html;
mod post;

pub use client::{HttpPostSource, PostSource};
pub use html::{HtmlPolicy, TrustedHtml};
pub use post::{parse_posts, Post, RichText, SeoMeta};
