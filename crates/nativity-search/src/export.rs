//! JSON export of the search index.
//!
//! The browser bundle loads this file once and runs the same filter client-side.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{SearchError, item::SearchItem};

/// Maximum recommended size for the exported index (500KB).
pub const MAX_INDEX_SIZE: usize = 500 * 1024;

const INDEX_VERSION: u32 = 1;

/// Serialized form of the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexFile {
    /// Index format version.
    pub version: u32,

    /// Site the index was generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_for: Option<String>,

    /// Items in default (priority) order.
    pub items: Vec<SearchItem>,
}

impl SearchIndexFile {
    /// Wrap a list of items.
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self {
            version: INDEX_VERSION,
            generated_for: None,
            items,
        }
    }

    /// Record the site this index belongs to.
    pub fn with_site(mut self, base_url: impl Into<String>) -> Self {
        self.generated_for = Some(base_url.into());
        self
    }

    /// Serialize the index to JSON.
    pub fn to_json(&self) -> Result<String, SearchError> {
        serde_json::to_string(self).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Serialize the index to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SearchError> {
        serde_json::to_string_pretty(self).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Deserialize an index from JSON.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        serde_json::from_str(json).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Write the index to a file, returning the number of bytes written.
    pub fn write_to_file(&self, path: &Path, pretty: bool) -> Result<usize, SearchError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };

        if json.len() > MAX_INDEX_SIZE {
            warn!(
                size = json.len(),
                max = MAX_INDEX_SIZE,
                "Search index exceeds recommended size"
            );
        }

        fs::write(path, &json).map_err(|e| SearchError::Io(e.to_string()))?;
        info!(path = %path.display(), items = self.items.len(), bytes = json.len(), "Wrote search index");
        Ok(json.len())
    }

    /// Rough size of the serialized index.
    pub fn estimated_size(&self) -> usize {
        self.items
            .iter()
            .map(|item| {
                item.id.len()
                    + item.title.len()
                    + item.href.len()
                    + item.description.as_ref().map(|s| s.len()).unwrap_or(0)
                    + item.keywords.iter().map(|k| k.len() + 3).sum::<usize>()
                    + item.synonyms.iter().map(|s| s.len() + 3).sum::<usize>()
                    + 100 // JSON overhead
            })
            .sum()
    }

    /// Check if the index is within the recommended size limit.
    pub fn is_within_size_limit(&self) -> bool {
        self.estimated_size() <= MAX_INDEX_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::search_items;

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("search-index.json");

        let index = SearchIndexFile::new(search_items().to_vec()).with_site("https://nativity-ui.dev");
        let written = index.write_to_file(&path, false).expect("write index");

        let json = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(json.len(), written);

        let parsed = SearchIndexFile::from_json(&json).expect("parse index");
        assert_eq!(parsed, index);
        assert_eq!(parsed.generated_for.as_deref(), Some("https://nativity-ui.dev"));
    }

    #[test]
    fn test_json_uses_site_field_names() {
        let index = SearchIndexFile::new(search_items()[..1].to_vec());
        let json = index.to_json().unwrap();
        assert!(json.starts_with("{\"version\":1,"));
        assert!(json.contains("\"type\":\"doc\""));
        assert!(json.contains("\"href\":\"/docs\""));
        assert!(!json.contains("generated_for"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SearchIndexFile::from_json("{\"items\": 3}").unwrap_err();
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("index.json");

        let err = SearchIndexFile::new(vec![])
            .write_to_file(&path, true)
            .unwrap_err();
        assert!(matches!(err, SearchError::Io(_)));
    }

    #[test]
    fn test_estimated_size() {
        let index = SearchIndexFile::new(search_items().to_vec());
        let estimated = index.estimated_size();

        assert!(estimated > 0);
        assert!(index.is_within_size_limit());
        assert_eq!(SearchIndexFile::new(vec![]).estimated_size(), 0);
    }
}
