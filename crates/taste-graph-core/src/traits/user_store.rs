//! User-account store: existence checks and match-list commits.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::MatchResult;
use crate::types::TopMatches;

/// The account-side collaborator the engine commits through.
#[async_trait]
pub trait UserAccountStore: Send + Sync {
    /// True if `user_id` resolves to an existing account.
    async fn user_exists(&self, user_id: Uuid) -> MatchResult<bool>;

    /// Atomically replace `user_id`'s top matches with `ranked`.
    ///
    /// All-or-nothing: on failure the account keeps its previous list.
    /// Candidates in `ranked` that no longer exist are silently dropped
    /// from the committed list; a missing subject fails the whole commit
    /// with [`MatchError::UserNotFound`].
    ///
    /// Returns the committed list for observability.
    ///
    /// [`MatchError::UserNotFound`]: crate::error::MatchError::UserNotFound
    async fn replace_top_matches(
        &self,
        user_id: Uuid,
        ranked: Vec<Uuid>,
    ) -> MatchResult<TopMatches>;

    /// The currently committed list for `user_id`.
    ///
    /// `Ok(None)` if the account exists but has never had a run committed;
    /// [`MatchError::UserNotFound`] if the account does not exist.
    ///
    /// [`MatchError::UserNotFound`]: crate::error::MatchError::UserNotFound
    async fn top_matches(&self, user_id: Uuid) -> MatchResult<Option<TopMatches>>;
}
