//! The persisted top-matches relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered, size-bounded list of a user's best taste matches.
///
/// Owned by the subject account. Invariants:
/// - the subject's own identifier never appears in its own list
/// - length <= K (see `MatcherConfig::top_k`)
/// - every member shared at least one rated item with the subject at
///   computation time
/// - each recomputation replaces the previous list wholesale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopMatches {
    /// Matched user identifiers, best coefficient first.
    pub matches: Vec<Uuid>,
    /// When this list was committed.
    pub computed_at: DateTime<Utc>,
}

impl TopMatches {
    /// Wrap a ranked identifier list, stamping it with the current time.
    pub fn new(matches: Vec<Uuid>) -> Self {
        Self {
            matches,
            computed_at: Utc::now(),
        }
    }

    /// An empty list, as on a freshly created account.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of matched users.
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True if no matches are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True if `user_id` appears in the list.
    #[inline]
    pub fn contains(&self, user_id: &Uuid) -> bool {
        self.matches.contains(user_id)
    }
}

impl Default for TopMatches {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let matches = TopMatches::empty();
        assert!(matches.is_empty());
        assert_eq!(matches.len(), 0);
    }

    #[test]
    fn test_order_preserved() {
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let matches = TopMatches::new(ids.clone());

        assert_eq!(matches.matches, ids);
        assert_eq!(matches.len(), 3);
        assert!(matches.contains(&ids[1]));
        assert!(!matches.contains(&Uuid::new_v4()));
    }
}
