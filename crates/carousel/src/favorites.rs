//! Persisted favorite selections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use showcase_core::ProductId;

/// Ordered, duplicate-free set of favorited product ids.
///
/// Serialized as a plain JSON array so the stored shape matches what
/// earlier writers produced. Insertion order is kept; loading a stored
/// list drops any duplicates another writer left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is favorited.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Add `id` unless it is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, id: ProductId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove every occurrence of `id`.
    ///
    /// Returns `true` if the set changed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership of `id`; returns the new favorited state.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.insert(id.clone());
            true
        }
    }

    /// Drop duplicate ids, keeping first occurrences in order.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.ids.retain(|id| seen.insert(id.clone()));
    }

    /// Iterate over favorited ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Number of favorited ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
