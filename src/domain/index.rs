//! The tag index: a bidirectional mapping between content keys and tags
//!
//! One logical string-keyed store holds both directions. A key that is a
//! content key maps to the tags attached to that content; a key that is a
//! tag maps to the content keys carrying it. The invariant is that the
//! two directions always agree: `t` is in the forward set of `c` exactly
//! when `c` is in the inverse set of `t`.

use crate::domain::content_id::ContentKey;
use crate::domain::expression::{TagExpression, TagSet};
use crate::error::Result;

/// Port to the durable string-keyed map backing the index.
///
/// `get` distinguishes a key that was never written (`None`) from one
/// holding an empty set; query paths coalesce the two. `set` replaces the
/// stored value entirely and persists before returning. No atomicity
/// across keys is promised at this layer.
pub trait TagStore {
    fn get(&self, key: &str) -> Result<Option<TagSet>>;
    fn set(&mut self, key: &str, value: &TagSet) -> Result<()>;
}

impl<S: TagStore + ?Sized> TagStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<TagSet>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &TagSet) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Typed view over a [`TagStore`] that maintains the bidirectional
/// invariant on every mutation.
#[derive(Debug)]
pub struct TagIndex<S> {
    store: S,
}

impl<S: TagStore> TagIndex<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Tags attached to `key`. Absence coalesces to the empty set.
    pub fn tags_of(&self, key: &ContentKey) -> Result<TagSet> {
        Ok(self.store.get(key.as_str())?.unwrap_or_default())
    }

    /// Content keys carrying `tag`. Absence coalesces to the empty set.
    /// The tag is looked up literally; no expression syntax applies here.
    pub fn files_of(&self, tag: &str) -> Result<TagSet> {
        Ok(self.store.get(tag)?.unwrap_or_default())
    }

    /// Apply a tag expression to `key`, replacing its forward entry and
    /// synchronizing every touched inverse entry. Returns the new tag set.
    ///
    /// The update is a sequence of independent per-key read-modify-write
    /// operations: last writer wins per key, with no cross-key atomicity.
    /// A concurrent writer on overlapping tags can interleave and break
    /// the invariant; single-process use is the supported mode.
    ///
    /// Inverse entries are never deleted, only emptied; an empty inverse
    /// set and an absent one mean the same thing to queries. Applying the
    /// same expression twice in a row yields the same final state.
    pub fn apply(&mut self, key: &ContentKey, expression: &TagExpression) -> Result<TagSet> {
        let add_tags = expression.additions();
        let rem_tags = expression.removals();
        tracing::debug!(?add_tags, ?rem_tags, "classified expression");

        let old_tags = self.tags_of(key)?;
        let new_tags: TagSet = old_tags
            .union(&add_tags)
            .filter(|tag| !rem_tags.contains(*tag))
            .cloned()
            .collect();
        tracing::debug!(?old_tags, ?new_tags, key = %key, "replacing forward entry");

        // Strip the key from every old inverse entry, then re-add it to
        // every new one. Tags in both sets get a redundant write; the
        // final state is what matters.
        for tag in &old_tags {
            let mut inverse = self.files_of(tag)?;
            inverse.remove(key.as_str());
            self.store.set(tag, &inverse)?;
        }
        for tag in &new_tags {
            let mut inverse = self.files_of(tag)?;
            inverse.insert(key.as_str().to_string());
            self.store.set(tag, &inverse)?;
        }
        self.store.set(key.as_str(), &new_tags)?;

        Ok(new_tags)
    }
}
