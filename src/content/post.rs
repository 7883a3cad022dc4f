//! Post model as returned by the content API

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeSet;

use super::TrustedHtml;

/// A post fetched from the content API
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Upstream identifier
    pub id: u64,

    /// Last modification time, as reported by the API (site-local, no offset)
    pub modified: NaiveDateTime,

    /// Rendered title
    pub title: RichText,

    /// Category ids the post belongs to
    #[serde(default)]
    pub categories: BTreeSet<u64>,

    /// SEO metadata
    #[serde(rename = "yoast_head_json", default, deserialize_with = "nullable")]
    pub seo: SeoMeta,
}

impl Post {
    pub fn in_category(&self, category_id: u64) -> bool {
        self.categories.contains(&category_id)
    }
}

/// A field the API renders server-side
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub rendered: TrustedHtml,
}

/// Short description and social preview image
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoMeta {
    #[serde(default)]
    pub description: Option<TrustedHtml>,

    #[serde(rename = "og_image", default, deserialize_with = "first_image")]
    pub og_image: Option<String>,
}

#[derive(Deserialize)]
struct ImageRef {
    url: String,
}

/// `og_image` is a list of image objects; only the first one is shown
fn first_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let images: Option<Vec<ImageRef>> = Option::deserialize(deserializer)?;
    Ok(images.and_then(|images| images.into_iter().next()).map(|i| i.url))
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a content API response body
pub fn parse_posts(body: &str) -> Result<Vec<Post>, serde_json::Error> {
    serde_json::from_str(body)
}
