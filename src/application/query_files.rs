//! Query files by tag use case

use crate::domain::expression::TagSet;
use crate::domain::index::TagStore;
use crate::domain::TagIndex;
use crate::error::Result;

/// Service for finding the content keys matching a list of tags.
///
/// Matching is a pure union: a file matches if it carries any of the
/// given tags. Expression prefixes are not interpreted here; a token
/// starting with `+` or `-` is looked up literally, so `get -x` searches
/// for the tag `-x` rather than excluding `x`. This asymmetry with `set`
/// is part of the tool's contract.
pub struct QueryFilesService<S> {
    index: TagIndex<S>,
}

impl<S: TagStore> QueryFilesService<S> {
    /// Create a new query service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            index: TagIndex::new(store),
        }
    }

    /// Union the inverse entries of every token. An empty token list, or
    /// tokens naming unknown tags, yield an empty result.
    pub fn execute<I, T>(&self, tags: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut matches = TagSet::new();
        for tag in tags {
            let tag = tag.as_ref();
            let files = self.index.files_of(tag)?;
            tracing::debug!(tag, count = files.len(), "matched files for tag");
            matches.extend(files);
        }

        Ok(matches.into_iter().collect())
    }
}
