//! Result grouping for the search dialog's sections.

use serde::Serialize;

use crate::{
    aggregate::search_items,
    filter::filter_search_items,
    item::{ItemType, SearchItem},
};

/// Search items partitioned by [`ItemType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedItems {
    pub docs: Vec<SearchItem>,
    pub components: Vec<SearchItem>,
    pub examples: Vec<SearchItem>,
    pub features: Vec<SearchItem>,
}

impl GroupedItems {
    /// Bucket for the given item type.
    pub fn bucket(&self, item_type: ItemType) -> &[SearchItem] {
        match item_type {
            ItemType::Doc => &self.docs,
            ItemType::Component => &self.components,
            ItemType::Example => &self.examples,
            ItemType::Feature => &self.features,
        }
    }

    /// Sections in display order with their headings.
    pub fn sections(&self) -> [(&'static str, &[SearchItem]); 4] {
        [
            ("Documentation", self.docs.as_slice()),
            ("Components", self.components.as_slice()),
            ("Examples", self.examples.as_slice()),
            ("Quick Links", self.features.as_slice()),
        ]
    }

    /// Total items across all buckets.
    pub fn len(&self) -> usize {
        self.docs.len() + self.components.len() + self.examples.len() + self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any bucket has an item.
    pub fn has_results(&self) -> bool {
        !self.is_empty()
    }

    /// All items flattened in section order, as the dialog lists them.
    pub fn flatten(&self) -> Vec<&SearchItem> {
        self.sections()
            .into_iter()
            .flat_map(|(_, items)| items.iter())
            .collect()
    }
}

/// Partition `items` by type, keeping each bucket in input order.
pub fn group_items(items: &[SearchItem]) -> GroupedItems {
    let mut grouped = GroupedItems::default();

    for item in items {
        let bucket = match item.item_type {
            ItemType::Doc => &mut grouped.docs,
            ItemType::Component => &mut grouped.components,
            ItemType::Example => &mut grouped.examples,
            ItemType::Feature => &mut grouped.features,
        };
        bucket.push(item.clone());
    }

    grouped
}

/// The full index grouped by type.
pub fn get_grouped_items() -> GroupedItems {
    group_items(search_items())
}

/// What the search dialog shows for `query`.
pub fn grouped_results(query: &str) -> GroupedItems {
    if query.trim().is_empty() {
        return get_grouped_items();
    }
    group_items(&filter_search_items(query))
}
