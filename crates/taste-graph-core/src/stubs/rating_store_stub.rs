//! In-memory implementation of `RatingStore`.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::MatchResult;
use crate::traits::RatingStore;
use crate::types::{RatedItemKey, Rating};

/// In-memory rating corpus for tests and development.
///
/// Maintains two views of the same rows:
///
/// - `by_author`: author -> (item -> rating), which enforces the
///   at-most-one-rating-per-(author, item) assumption (inserts for an
///   existing pair replace the row last-write-wins by `rated_at`)
/// - `by_item`: item -> set of author ids, the inverted index that makes
///   `raters_of_any` a hash-join over the queried keys instead of a scan
///
/// # Thread Safety
///
/// Thread-safe via `DashMap`. No persistence; data is lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    by_author: DashMap<Uuid, HashMap<RatedItemKey, Rating>>,
    by_item: DashMap<RatedItemKey, HashSet<Uuid>>,
}

impl InMemoryRatingStore {
    /// Create a new empty rating store.
    pub fn new() -> Self {
        info!("Creating new InMemoryRatingStore (no persistence)");
        Self::default()
    }

    /// Insert one rating row.
    ///
    /// An existing row for the same (author, item) pair is replaced only
    /// if the new row is not older (last-write-wins by `rated_at`).
    pub fn insert(&self, rating: Rating) {
        let author_id = rating.author_id;
        let item = rating.item;

        let mut rows = self.by_author.entry(author_id).or_default();
        match rows.get(&item) {
            Some(existing) if existing.rated_at > rating.rated_at => {
                debug!(
                    "Ignoring stale rating row for ({}, {})",
                    author_id, item
                );
            }
            _ => {
                rows.insert(item, rating);
            }
        }
        drop(rows);

        self.by_item.entry(item).or_default().insert(author_id);
    }

    /// Insert a batch of rating rows.
    pub fn insert_many(&self, ratings: impl IntoIterator<Item = Rating>) {
        for rating in ratings {
            self.insert(rating);
        }
    }

    /// Remove every rating authored by `user_id` (account-deletion cascade).
    pub fn remove_user(&self, user_id: Uuid) {
        if let Some((_, rows)) = self.by_author.remove(&user_id) {
            for item in rows.keys() {
                if let Some(mut raters) = self.by_item.get_mut(item) {
                    raters.remove(&user_id);
                }
            }
            debug!("Removed {} rating rows for user {}", rows.len(), user_id);
        }
    }

    /// Total number of rating rows.
    pub fn rating_count(&self) -> usize {
        self.by_author.iter().map(|entry| entry.value().len()).sum()
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn ratings_by_user(&self, user_id: Uuid) -> MatchResult<Vec<Rating>> {
        let ratings = self
            .by_author
            .get(&user_id)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default();

        Ok(ratings)
    }

    async fn raters_of_any(&self, items: &[RatedItemKey]) -> MatchResult<HashSet<Uuid>> {
        let mut raters = HashSet::new();

        // Hash-join: one index probe per queried item
        for item in items {
            if let Some(entry) = self.by_item.get(item) {
                raters.extend(entry.iter().copied());
            }
        }

        debug!(
            "raters_of_any over {} items found {} distinct raters",
            items.len(),
            raters.len()
        );
        Ok(raters)
    }
}
