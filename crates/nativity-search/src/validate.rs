//! Consistency checks for search items.

use std::collections::HashSet;

use crate::item::SearchItem;

/// Lowest and highest allowed priority.
const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Problems found in `items`, empty when the index is well formed.
pub fn validate_items(items: &[SearchItem]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for item in items {
        if !seen.insert(item.id.as_str()) {
            problems.push(format!("Duplicate search item id: {}", item.id));
        }

        if item.priority.is_some_and(|p| !PRIORITY_RANGE.contains(&p)) {
            problems.push(format!(
                "Priority {} of {} is outside {}..={}",
                item.effective_priority(),
                item.id,
                PRIORITY_RANGE.start(),
                PRIORITY_RANGE.end()
            ));
        }

        if item.title.trim().is_empty() {
            problems.push(format!("Search item {} has an empty title", item.id));
        }

        if item.href.trim().is_empty() {
            problems.push(format!("Search item {} has an empty href", item.id));
        }
    }

    problems
}
