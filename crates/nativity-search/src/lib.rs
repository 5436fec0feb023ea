//! Nativity Search Library
//!
//! The global search index behind the documentation site's search dialog.
//!
//! # Features
//!
//! - **Aggregation**: docs, components, examples and quick links flattened
//!   into one priority-ordered list of [`SearchItem`]s, built once
//! - **Filtering**: case-insensitive substring matching over titles,
//!   descriptions, keywords, synonyms and categories
//! - **Grouping**: results partitioned into the dialog's four sections
//! - **Export**: the index serialized to JSON for the browser bundle
//!
//! # Example
//!
//! ```
//! use nativity_search::{filter_search_items, group_items};
//!
//! let results = filter_search_items("toggle");
//! assert!(results.iter().any(|item| item.id == "component-switch"));
//!
//! let grouped = group_items(&results);
//! assert_eq!(grouped.len(), results.len());
//! ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod group;
pub mod item;
pub mod selection;
pub mod validate;

pub use aggregate::{build_search_items, search_items, synonym_slugs, synonyms_for};
pub use export::{MAX_INDEX_SIZE, SearchIndexFile};
pub use filter::{filter_items, filter_search_items, matches_query};
pub use group::{GroupedItems, get_grouped_items, group_items, grouped_results};
pub use item::{DEFAULT_PRIORITY, Framework, Icon, ItemType, SearchItem};
pub use selection::SelectionCursor;
pub use validate::validate_items;
use thiserror::Error;

/// Search-related errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
