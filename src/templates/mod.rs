//! Built-in learn page templates using Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is on for every
//! template; only fields holding upstream markup are marked `safe`.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::{html_escape, PageMeta};

/// Template renderer with embedded learn templates
#[derive(Clone)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();

        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("learn/layout.html")),
            ("learn.html", include_str!("learn/learn.html")),
            ("reference.html", include_str!("learn/reference.html")),
            (
                "partials/head.html",
                include_str!("learn/partials/head.html"),
            ),
            (
                "partials/reference_grid.html",
                include_str!("learn/partials/reference_grid.html"),
            ),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Tera filter: format date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    // Dates arrive as "2023-05-30"; "LL" reformats to "May 30, 2023"
    if format == "LL" {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(tera::Value::String(date.format("%B %-d, %Y").to_string()));
        }
    }

    Ok(tera::Value::String(s))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct LearnPageData {
    pub buckets: Vec<BucketData>,
    pub references: Vec<ReferenceCard>,
    /// Set when the content API failed and the page is rendered without posts
    pub content_unavailable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketData {
    pub id: u64,
    pub name: String,
    pub cards: Vec<PostCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub id: u64,
    pub href: String,
    /// Markup, emitted unescaped
    pub title_html: String,
    pub title_text: String,
    /// Markup, emitted unescaped
    pub description_html: Option<String>,
    pub image: Option<String>,
    pub modified: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceCard {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceDetailData {
    pub entry: ReferenceCard,
    pub back_href: String,
}

/// Context shared by every page: metadata plus the page's own data under `page`
pub fn page_context<T: Serialize>(meta: &PageMeta, page: &T) -> Context {
    let mut context = Context::new();
    context.insert("meta", meta);
    context.insert("page", page);
    context
}
