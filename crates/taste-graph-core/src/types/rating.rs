//! Rating rows as this engine sees them.
//!
//! Ratings are written and moderated elsewhere; the matching engine only
//! ever reads them. At most one rating per (author, item) pair is assumed;
//! the in-memory store enforces this, and `UserVector::from_ratings`
//! collapses any upstream duplicates last-write-wins by `rated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::constants::score;
use crate::error::{MatchError, MatchResult};

/// Kind of entity a rating can target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ItemKind {
    /// A standalone film.
    Film,
    /// A series (rated as a whole, not per episode).
    Series,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Film => write!(f, "film"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// Identity of a rateable target.
///
/// Two ratings target the same item iff both `item_id` and `kind` are
/// equal. `Ord` gives the consistent key order the correlation kernel uses
/// when it lines up shared items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RatedItemKey {
    /// Identifier of the rated entity.
    pub item_id: Uuid,
    /// What kind of entity it is.
    pub kind: ItemKind,
}

impl RatedItemKey {
    /// Create a new item key.
    #[inline]
    pub fn new(item_id: Uuid, kind: ItemKind) -> Self {
        Self { item_id, kind }
    }
}

impl std::fmt::Display for RatedItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.item_id)
    }
}

/// A single score one user gave one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// The user who authored the rating.
    pub author_id: Uuid,
    /// The rated item.
    pub item: RatedItemKey,
    /// Score on the fixed scale (see `config::constants::score`).
    pub score: u8,
    /// When the rating was (last) written.
    pub rated_at: DateTime<Utc>,
}

impl Rating {
    /// Create a rating, validating the score against the fixed scale.
    pub fn new(
        author_id: Uuid,
        item: RatedItemKey,
        score: u8,
        rated_at: DateTime<Utc>,
    ) -> MatchResult<Self> {
        if score < score::MIN || score > score::MAX {
            return Err(MatchError::InvalidScore {
                score,
                min: score::MIN,
                max: score::MAX,
            });
        }

        Ok(Self {
            author_id,
            item,
            score,
            rated_at,
        })
    }
}
