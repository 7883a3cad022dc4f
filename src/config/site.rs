//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::content::HtmlPolicy;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    pub url: String,
    pub scheme: String,
    pub share_image: String,
    pub page_path: String,
    pub reference_path: String,

    // Directory
    pub static_dir: String,

    // Content
    #[serde(default)]
    pub content: ContentConfig,
    pub on_fetch_error: FetchFailurePolicy,
    pub html_policy: HtmlPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Learn".to_string(),
            description: "Guides, tutorials and tips for getting the most out of the IDE"
                .to_string(),

            url: "https://www.example.com".to_string(),
            scheme: "https".to_string(),
            share_image: "/images/facebook-share-image.png".to_string(),
            page_path: "/learn".to_string(),
            reference_path: "/learn/category".to_string(),

            static_dir: "public".to_string(),

            content: ContentConfig::default(),
            on_fetch_error: FetchFailurePolicy::default(),
            html_policy: HtmlPolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the paths the server mounts routes on
    pub fn validate(&self) -> Result<()> {
        for (key, path) in [
            ("page_path", &self.page_path),
            ("reference_path", &self.reference_path),
        ] {
            if !path.starts_with('/') {
                anyhow::bail!("{} must start with '/', got {:?}", key, path);
            }
            if path.contains(':') || path.contains('*') {
                anyhow::bail!("{} must not contain ':' or '*', got {:?}", key, path);
            }
        }

        let page = self.page_path.trim_end_matches('/');
        let reference = self.reference_path.trim_end_matches('/');
        if reference.is_empty() {
            anyhow::bail!("reference_path must not be '/'");
        }
        if page == reference || page.starts_with(&format!("{}/", reference)) {
            anyhow::bail!(
                "page_path {:?} collides with reference_path {:?}",
                self.page_path,
                self.reference_path
            );
        }

        Ok(())
    }

    /// Host part of the configured site URL, used when a request carries no Host header
    pub fn default_host(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        rest.split('/').next().unwrap_or(rest)
    }
}

/// Remote content API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub endpoint: String,
    pub per_page: usize,
    pub fields: Vec<String>,
    /// Prefix for card links, the post id is appended
    pub post_link_base: String,
    pub timeout_secs: u64,
    pub retries: u32,
    pub retry_backoff_ms: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://blog.example.com/wp-json/wp/v2/posts".to_string(),
            per_page: 100,
            fields: [
                "id",
                "modified",
                "title",
                "categories",
                "yoast_head_json.description",
                "yoast_head_json.og_image",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            post_link_base: "https://blog.example.com/?p=".to_string(),
            timeout_secs: 10,
            retries: 1,
            retry_backoff_ms: 250,
        }
    }
}

impl ContentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// What to serve when the content API cannot be used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFailurePolicy {
    /// Render the page with empty buckets
    #[default]
    Empty,
    /// Answer 502 Bad Gateway
    BadGateway,
}
