//! Page builders - turn fetched posts and static tables into rendered HTML

use crate::catalog::{self, ReferenceEntry, CATEGORIES};
use crate::config::{FetchFailurePolicy, SiteConfig};
use crate::content::Post;
use crate::error::PageError;
use crate::helpers::PageMeta;
use crate::partition::{partition, Bucket};
use crate::templates::{
    page_context, BucketData, LearnPageData, PostCard, ReferenceCard, ReferenceDetailData,
};
use crate::LearnSite;

/// Fetch posts and render the learn page.
///
/// There is no caching: every call performs one fetch so edits in the
/// content system show up on the next page view.
pub async fn render_learn(site: &LearnSite, host: &str, path: &str) -> Result<String, PageError> {
    let posts = match site.source().fetch_posts().await {
        Ok(posts) => Some(posts),
        Err(e) => match site.config.on_fetch_error {
            FetchFailurePolicy::Empty => {
                tracing::warn!(error = %e, "Content unavailable, rendering empty buckets");
                None
            }
            FetchFailurePolicy::BadGateway => return Err(e.into()),
        },
    };

    let data = build_learn_data(&site.config, posts.as_deref());
    let meta = PageMeta::from_request(&site.config, host, path);
    Ok(site
        .renderer()
        .render("learn.html", &page_context(&meta, &data))?)
}

/// Template data for the learn page; `None` means the fetch failed
pub fn build_learn_data(config: &SiteConfig, posts: Option<&[Post]>) -> LearnPageData {
    let buckets = partition(posts.unwrap_or_default(), CATEGORIES)
        .iter()
        .map(|bucket| bucket_data(config, bucket))
        .collect();

    LearnPageData {
        buckets,
        references: reference_cards(config),
        content_unavailable: posts.is_none(),
    }
}

fn bucket_data(config: &SiteConfig, bucket: &Bucket) -> BucketData {
    BucketData {
        id: bucket.category.id,
        name: bucket.category.name.to_string(),
        cards: bucket.posts.iter().map(|p| post_card(config, p)).collect(),
    }
}

fn post_card(config: &SiteConfig, post: &Post) -> PostCard {
    PostCard {
        id: post.id,
        href: format!("{}{}", config.content.post_link_base, post.id),
        title_html: post.title.rendered.render(config.html_policy),
        title_text: post.title.rendered.plain_text(),
        description_html: post
            .seo
            .description
            .as_ref()
            .filter(|d| !d.is_empty())
            .map(|d| d.render(config.html_policy)),
        image: post.seo.og_image.clone(),
        modified: post.modified.format("%Y-%m-%d").to_string(),
    }
}

/// One card per bundled reference entry, in table order
pub fn reference_cards(config: &SiteConfig) -> Vec<ReferenceCard> {
    catalog::REFERENCE
        .iter()
        .map(|entry| reference_card(config, entry))
        .collect()
}

fn reference_card(config: &SiteConfig, entry: &ReferenceEntry) -> ReferenceCard {
    ReferenceCard {
        name: entry.name.to_string(),
        icon: entry.icon.to_string(),
        description: entry.description.to_string(),
        href: entry.href(&config.reference_path),
    }
}

/// Render the detail view for one reference entry, `name` already decoded
pub fn render_reference(
    site: &LearnSite,
    host: &str,
    path: &str,
    name: &str,
) -> Result<String, PageError> {
    let entry =
        catalog::find_reference(name).ok_or_else(|| PageError::NotFound(name.to_string()))?;

    let mut meta = PageMeta::from_request(&site.config, host, path);
    meta.title = format!("{} | {}", entry.name, site.config.title);
    meta.description = entry.description.to_string();

    let data = ReferenceDetailData {
        entry: reference_card(&site.config, entry),
        back_href: site.config.page_path.clone(),
    };
    Ok(site
        .renderer()
        .render("reference.html", &page_context(&meta, &data))?)
}
