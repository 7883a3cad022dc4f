//! learn-page: a server-rendered Learn page for the IDE
//!
//! Posts are fetched from the content API on every request, bucketed into a
//! fixed set of display categories and rendered with embedded Tera templates,
//! followed by a grid of bundled reference categories.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod page;
pub mod partition;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::{HttpPostSource, PostSource};
use error::PageError;
use templates::TemplateRenderer;

/// The learn site application
#[derive(Clone)]
pub struct LearnSite {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory served for static assets
    pub static_dir: PathBuf,
    renderer: TemplateRenderer,
    source: Arc<dyn PostSource>,
}

impl LearnSite {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source = HttpPostSource::new(config.content.clone())?;
        Self::with_source(config, base_dir, Arc::new(source))
    }

    /// Create a site that takes its posts from `source`
    pub fn with_source<P: AsRef<Path>>(
        config: config::SiteConfig,
        base_dir: P,
        source: Arc<dyn PostSource>,
    ) -> Result<Self> {
        config.validate()?;
        let base_dir = base_dir.as_ref().to_path_buf();
        let static_dir = base_dir.join(&config.static_dir);
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            config,
            base_dir,
            static_dir,
            renderer,
            source,
        })
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    pub fn source(&self) -> &dyn PostSource {
        self.source.as_ref()
    }

    /// Render the learn page for a request to `host` + `path`
    pub async fn learn_page(&self, host: &str, path: &str) -> Result<String, PageError> {
        page::render_learn(self, host, path).await
    }

    /// Render the detail view of the reference entry called `name`
    pub fn reference_page(&self, host: &str, path: &str, name: &str) -> Result<String, PageError> {
        page::render_reference(self, host, path, name)
    }
}
