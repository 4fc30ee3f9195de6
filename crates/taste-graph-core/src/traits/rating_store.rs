//! Read-only access to the rating corpus.

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::MatchResult;
use crate::types::{RatedItemKey, Rating};

/// Read-only view of the global rating corpus.
///
/// The engine never writes through this trait; rating rows are created and
/// edited by the surrounding service layer. Implementations must answer
/// `raters_of_any` from an item-keyed index (a hash-join per item), never
/// by scanning every user's ratings: the global rating table can be large
/// and the candidate set is usually a small fraction of it.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// All ratings authored by `user_id`.
    ///
    /// Returns an empty vec (not an error) for users who have never rated
    /// anything, including identifiers that do not resolve to an account.
    async fn ratings_by_user(&self, user_id: Uuid) -> MatchResult<Vec<Rating>>;

    /// Distinct users with at least one rating on any of `items`.
    ///
    /// The result may include the author of the queried items; the
    /// candidate finder removes the subject itself. An empty `items` slice
    /// yields an empty set.
    async fn raters_of_any(&self, items: &[RatedItemKey]) -> MatchResult<HashSet<Uuid>>;
}
