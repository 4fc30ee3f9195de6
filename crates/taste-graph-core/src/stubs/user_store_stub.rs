//! In-memory implementation of `UserAccountStore`.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{MatchError, MatchResult};
use crate::traits::UserAccountStore;
use crate::types::TopMatches;

/// Per-account record. The match list is owned by the account and dies
/// with it.
#[derive(Debug, Default)]
struct AccountRecord {
    top_matches: Option<TopMatches>,
}

/// In-memory user-account store for tests and development.
///
/// # Thread Safety
///
/// Thread-safe via `DashMap`. Replacement of a match list mutates a single
/// map entry under its shard lock, so readers never observe a partially
/// replaced list. No persistence; data is lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    accounts: DashMap<Uuid, AccountRecord>,
}

impl InMemoryUserStore {
    /// Create a new empty user store.
    pub fn new() -> Self {
        info!("Creating new InMemoryUserStore (no persistence)");
        Self::default()
    }

    /// Create an account with a fresh identifier and no match list.
    pub fn create_user(&self) -> Uuid {
        let user_id = Uuid::new_v4();
        self.accounts.insert(user_id, AccountRecord::default());
        user_id
    }

    /// Register an account under a caller-chosen identifier.
    pub fn add_user(&self, user_id: Uuid) {
        self.accounts.insert(user_id, AccountRecord::default());
    }

    /// Delete an account. The owned match list goes with it (cascade).
    pub fn delete_user(&self, user_id: Uuid) -> bool {
        let removed = self.accounts.remove(&user_id).is_some();
        if removed {
            debug!("Deleted user {} and its match list", user_id);
        }
        removed
    }

    /// Number of existing accounts.
    pub fn user_count(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait]
impl UserAccountStore for InMemoryUserStore {
    async fn user_exists(&self, user_id: Uuid) -> MatchResult<bool> {
        Ok(self.accounts.contains_key(&user_id))
    }

    async fn replace_top_matches(
        &self,
        user_id: Uuid,
        ranked: Vec<Uuid>,
    ) -> MatchResult<TopMatches> {
        // Stale-candidate filter runs before the subject's entry is
        // locked; DashMap shard locks are not reentrant.
        let kept: Vec<Uuid> = ranked
            .into_iter()
            .filter(|id| *id != user_id && self.accounts.contains_key(id))
            .collect();

        let mut record = self
            .accounts
            .get_mut(&user_id)
            .ok_or(MatchError::UserNotFound { user_id })?;

        let committed = TopMatches::new(kept);
        record.top_matches = Some(committed.clone());

        debug!(
            "Replaced top matches for user {} ({} entries)",
            user_id,
            committed.len()
        );
        Ok(committed)
    }

    async fn top_matches(&self, user_id: Uuid) -> MatchResult<Option<TopMatches>> {
        let record = self
            .accounts
            .get(&user_id)
            .ok_or(MatchError::UserNotFound { user_id })?;

        Ok(record.top_matches.clone())
    }
}
