//! Ephemeral per-user rating vectors.

use std::collections::HashMap;

use uuid::Uuid;

use crate::types::{RatedItemKey, Rating};

/// A user's complete set of (item, score) pairs, keyed by item identity.
///
/// Derived and ephemeral: built fresh on every run from raw rating rows,
/// never persisted. Duplicate rows for the same item collapse
/// last-write-wins by `rated_at`.
#[derive(Debug, Clone)]
pub struct UserVector {
    /// The user whose ratings these are.
    pub author_id: Uuid,
    scores: HashMap<RatedItemKey, u8>,
}

impl UserVector {
    /// An empty vector for a user with no ratings.
    pub fn empty(author_id: Uuid) -> Self {
        Self {
            author_id,
            scores: HashMap::new(),
        }
    }

    /// Build a vector from raw rating rows.
    ///
    /// Rows are sorted by `rated_at` first, so when the underlying store
    /// permits duplicates for the same (author, item) pair the latest row
    /// wins.
    pub fn from_ratings(author_id: Uuid, mut ratings: Vec<Rating>) -> Self {
        ratings.sort_by_key(|r| r.rated_at);

        let mut scores = HashMap::with_capacity(ratings.len());
        for rating in ratings {
            scores.insert(rating.item, rating.score);
        }

        Self { author_id, scores }
    }

    /// Number of distinct rated items.
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if the user has never rated anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score the user gave `item`, if any.
    #[inline]
    pub fn get(&self, item: &RatedItemKey) -> Option<u8> {
        self.scores.get(item).copied()
    }

    /// All rated item keys, in arbitrary order.
    pub fn item_keys(&self) -> Vec<RatedItemKey> {
        self.scores.keys().copied().collect()
    }

    /// Item keys rated by both `self` and `other`, in sorted key order.
    ///
    /// The sort is what gives the correlation kernel a consistent pairing
    /// of the two score sequences.
    pub fn shared_items(&self, other: &UserVector) -> Vec<RatedItemKey> {
        let mut shared: Vec<RatedItemKey> = self
            .scores
            .keys()
            .filter(|key| other.scores.contains_key(key))
            .copied()
            .collect();
        shared.sort();
        shared
    }
}
