//! List fetched posts per display category

use anyhow::Result;

use crate::catalog::CATEGORIES;
use crate::helpers::truncate;
use crate::partition::{partition, Bucket};
use crate::LearnSite;

/// Fetch posts and print them grouped by category
pub async fn run(site: &LearnSite) -> Result<()> {
    let posts = site.source().fetch_posts().await?;
    let buckets = partition(&posts, CATEGORIES);

    let shown: usize = buckets.iter().map(|b| b.posts.len()).sum();
    println!("Fetched {} posts ({} placements):", posts.len(), shown);
    for bucket in &buckets {
        print!("{}", format_bucket(bucket));
    }

    Ok(())
}

fn format_bucket(bucket: &Bucket) -> String {
    let mut out = format!(
        "{} [{}] ({})\n",
        bucket.category.name,
        bucket.category.id,
        bucket.posts.len()
    );
    for post in &bucket.posts {
        out.push_str(&format!(
            "  {} - {} [#{}]\n",
            post.modified.format("%Y-%m-%d"),
            truncate(&post.title.rendered.plain_text(), 60, None),
            post.id
        ));
    }
    out
}
