//! The matching pipeline behind `recompute_top_matches`.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};
use uuid::Uuid;

use taste_graph_core::config::MatcherConfig;
use taste_graph_core::correlation;
use taste_graph_core::error::{MatchError, MatchResult};
use taste_graph_core::traits::{RatingStore, UserAccountStore};
use taste_graph_core::types::{SimilarityScore, TopMatches, UserVector};

use crate::{candidates, loader, ranker};

/// Recomputes a user's top-matches relation from the rating corpus.
///
/// Holds its two collaborators behind `Arc<dyn Trait>` so correlation
/// workers can share the rating store across tasks. The matcher itself is
/// stateless between runs; cloning it is cheap and a single instance can
/// serve concurrent runs for different subjects.
#[derive(Clone)]
pub struct TasteMatcher {
    ratings: Arc<dyn RatingStore>,
    users: Arc<dyn UserAccountStore>,
    config: MatcherConfig,
}

impl TasteMatcher {
    /// Create a matcher with the default configuration (K = 10).
    pub fn new(ratings: Arc<dyn RatingStore>, users: Arc<dyn UserAccountStore>) -> Self {
        Self::with_config(ratings, users, MatcherConfig::default())
    }

    /// Create a matcher with an explicit configuration.
    pub fn with_config(
        ratings: Arc<dyn RatingStore>,
        users: Arc<dyn UserAccountStore>,
        config: MatcherConfig,
    ) -> Self {
        Self {
            ratings,
            users,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Recompute and commit the top matches for `subject_id`.
    ///
    /// On success the subject's persisted list reflects the new ranking
    /// (possibly empty: no ratings or no item-sharing candidates is a
    /// successful empty result, not an error). The only terminal failure
    /// is [`MatchError::UserNotFound`], raised before any computation if
    /// the subject does not exist, or at commit time if it disappeared
    /// mid-run; the previous list is retained in that case.
    pub async fn recompute_top_matches(&self, subject_id: Uuid) -> MatchResult<TopMatches> {
        if !self.users.user_exists(subject_id).await? {
            return Err(MatchError::UserNotFound {
                user_id: subject_id,
            });
        }

        let subject = loader::load_vector(self.ratings.as_ref(), subject_id).await?;
        if subject.is_empty() {
            debug!("User {} has no ratings; committing empty list", subject_id);
            return self.users.replace_top_matches(subject_id, Vec::new()).await;
        }

        let found =
            candidates::find_candidates(self.ratings.as_ref(), subject_id, &subject).await?;
        if found.is_empty() {
            debug!(
                "User {} shares no items with anyone; committing empty list",
                subject_id
            );
            return self.users.replace_top_matches(subject_id, Vec::new()).await;
        }

        let scores = self.correlate_all(Arc::new(subject), found).await?;
        let ranked = ranker::rank(scores, self.config.top_k);

        let committed = self.users.replace_top_matches(subject_id, ranked).await?;
        info!(
            "Committed {} matches for user {}",
            committed.len(),
            subject_id
        );
        Ok(committed)
    }

    /// Correlate the subject against every candidate, bounded by the
    /// configured worker pool.
    ///
    /// Each worker loads one candidate vector and correlates it; workers
    /// are independent and side-effect-free, so gathering order does not
    /// matter. Candidates whose overlap vanished between discovery and
    /// load come back as `None` and are skipped.
    async fn correlate_all(
        &self,
        subject: Arc<UserVector>,
        found: HashSet<Uuid>,
    ) -> MatchResult<Vec<SimilarityScore>> {
        let candidate_count = found.len();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_correlations));
        let mut workers: JoinSet<MatchResult<Option<SimilarityScore>>> = JoinSet::new();

        for candidate_id in found {
            let semaphore = semaphore.clone();
            let ratings = self.ratings.clone();
            let subject = subject.clone();

            workers.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| MatchError::Task(e.to_string()))?;

                let candidate = loader::load_vector(ratings.as_ref(), candidate_id).await?;
                Ok(correlation::correlate(&subject, &candidate))
            });
        }

        let mut scores = Vec::with_capacity(candidate_count);
        while let Some(joined) = workers.join_next().await {
            let outcome = joined.map_err(|e| MatchError::Task(e.to_string()))?;
            if let Some(score) = outcome? {
                scores.push(score);
            }
        }

        debug!(
            "Correlated {} of {} candidates for user {}",
            scores.len(),
            candidate_count,
            subject.author_id
        );
        Ok(scores)
    }
}

impl std::fmt::Debug for TasteMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TasteMatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
