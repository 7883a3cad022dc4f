//! Render the learn page once

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::LearnSite;

/// Fetch posts, render the page as if requested at `host` + `path`, and
/// write it to `output` or stdout
pub async fn run(site: &LearnSite, host: &str, path: &str, output: Option<&Path>) -> Result<()> {
    let start = std::time::Instant::now();
    let html = site.learn_page(host, path).await?;

    match output {
        Some(output) => {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(output, &html)?;
            tracing::info!("Wrote {:?} in {:?}", output, start.elapsed());
        }
        None => {
            std::io::stdout().write_all(html.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::client::tests::StubSource;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let site = LearnSite::with_source(
            SiteConfig::default(),
            dir.path(),
            Arc::new(StubSource::Body(
                r#"[{"id": 1, "modified": "2024-01-01T00:00:00", "title": {"rendered": "Intro"}, "categories": [6]}]"#,
            )),
        )
        .unwrap();

        let output = dir.path().join("out/learn/index.html");
        run(&site, "example.com", "/learn", Some(&output)).await.unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Intro"));
        assert!(html.contains("https://example.com/learn"));
    }
}
