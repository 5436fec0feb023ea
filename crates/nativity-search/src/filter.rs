//! Query filtering and ranking.

use tracing::debug;

use crate::{aggregate::search_items, item::SearchItem};

/// Filter the built-in index by a free-text query.
///
/// See [`filter_items`] for matching and ranking rules.
pub fn filter_search_items(query: &str) -> Vec<SearchItem> {
    filter_items(search_items(), query)
}

/// Filter `items` by `query`.
///
/// A blank query returns every item unchanged. Otherwise an item matches when
/// the trimmed, lower-cased query is a substring of its title, description,
/// keywords, synonyms or category. Title matches rank first, then higher
/// priority; equal items keep their input order.
pub fn filter_items(items: &[SearchItem], query: &str) -> Vec<SearchItem> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return items.to_vec();
    }

    let mut results: Vec<(bool, &SearchItem)> = items
        .iter()
        .filter(|item| matches_query(item, &q))
        .map(|item| (item.title.to_lowercase().contains(&q), item))
        .collect();

    // Binary title boost, not a blended score
    results.sort_by(|(a_title, a), (b_title, b)| {
        b_title
            .cmp(a_title)
            .then_with(|| b.effective_priority().cmp(&a.effective_priority()))
    });

    debug!(query = %q, matches = results.len(), "Filtered search items");

    results.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Whether `item` matches an already trimmed and lower-cased query.
pub fn matches_query(item: &SearchItem, q: &str) -> bool {
    item.title.to_lowercase().contains(q)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(q))
        || item.keywords.join(" ").to_lowercase().contains(q)
        || item.synonyms.join(" ").to_lowercase().contains(q)
        || item
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(q))
}
