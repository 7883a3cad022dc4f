//! Bucketing posts into display categories

use crate::catalog::Category;
use crate::content::Post;

/// Posts shown under one category heading
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    pub category: Category,
    pub posts: Vec<&'a Post>,
}

/// One bucket per category, in category order.
///
/// Each bucket keeps the fetch order of its posts. A post listed in several
/// categories lands in each of them; a post in none is dropped.
pub fn partition<'a>(posts: &'a [Post], categories: &[Category]) -> Vec<Bucket<'a>> {
    categories
        .iter()
        .map(|category| Bucket {
            category: *category,
            posts: posts.iter().filter(|p| p.in_category(category.id)).collect(),
        })
        .collect()
}
