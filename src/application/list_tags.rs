//! List tags use case

use crate::domain::index::TagStore;
use crate::domain::{identify, TagIndex};
use crate::error::Result;
use std::path::Path;

/// Service for listing the tags attached to a file's content.
pub struct ListTagsService<S> {
    index: TagIndex<S>,
}

impl<S: TagStore> ListTagsService<S> {
    /// Create a new list tags service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            index: TagIndex::new(store),
        }
    }

    /// Hash the file and return its tags, sorted for stable display.
    /// An untagged file yields an empty list, not an error.
    pub fn execute(&self, path: &Path) -> Result<Vec<String>> {
        let key = identify(path)?;
        tracing::info!(key = %key, "listing tags");

        let tags = self.index.tags_of(&key)?;
        Ok(tags.into_iter().collect())
    }
}
