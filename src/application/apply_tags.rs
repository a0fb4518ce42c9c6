//! Apply tag expression use case

use crate::domain::expression::TagSet;
use crate::domain::index::TagStore;
use crate::domain::{identify, TagExpression, TagIndex};
use crate::error::Result;
use std::path::Path;

/// Service for applying a tag expression to a file's content.
pub struct ApplyTagsService<S> {
    index: TagIndex<S>,
}

impl<S: TagStore> ApplyTagsService<S> {
    /// Create a new apply service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            index: TagIndex::new(store),
        }
    }

    /// Hash the file, classify the tokens and update both directions of
    /// the index. Returns the file's resulting tag set.
    pub fn execute<I, T>(&mut self, path: &Path, tokens: I) -> Result<TagSet>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let key = identify(path)?;
        let expression = TagExpression::classify(tokens);
        tracing::info!(key = %key, "applying tag expression");

        self.index.apply(&key, &expression)
    }
}
