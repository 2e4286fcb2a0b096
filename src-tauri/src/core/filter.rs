//! Visible font list computation for the category picker and search box.

use super::font_catalog::{Category, CategoryBuckets};

/// Returns the bucket for `category` verbatim.
///
/// An empty result is valid; callers keep their current selection in that case.
pub fn filter_by_category(buckets: &CategoryBuckets, category: Category) -> Vec<String> {
    buckets.get(category).to_vec()
}

/// Returns the members of `base` whose name contains `term`, ignoring case.
///
/// An empty term means no filtering.
pub fn filter_by_search(buckets: &CategoryBuckets, term: &str, base: Category) -> Vec<String> {
    if term.is_empty() {
        return filter_by_category(buckets, base);
    }

    let needle = term.to_lowercase();
    buckets
        .get(base)
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
