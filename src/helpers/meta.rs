//! Page metadata derived from the inbound request

use serde::Serialize;

use super::url::absolute_url;
use crate::config::SiteConfig;

/// Canonical and social preview URLs for one rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub image_url: String,
}

impl PageMeta {
    /// Values are echoed verbatim; escaping happens when the template renders them.
    pub fn from_request(config: &SiteConfig, host: &str, path: &str) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            canonical_url: absolute_url(&config.scheme, host, path),
            image_url: absolute_url(&config.scheme, host, &config.share_image),
        }
    }
}
