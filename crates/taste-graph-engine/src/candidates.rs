//! Candidate finder (pipeline stage 2).

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use taste_graph_core::error::MatchResult;
use taste_graph_core::traits::RatingStore;
use taste_graph_core::types::UserVector;

/// Every other user with at least one rating on any item the subject has
/// rated.
///
/// Sharing an item is the sole admission filter; nothing else (trust
/// level, block status, prior matches) plays a role. The reverse lookup is
/// the store's item-indexed `raters_of_any`, so the cost scales with the
/// subject's vector and the candidate set, not the global rating table.
///
/// An empty subject vector yields an empty set without touching the store.
pub async fn find_candidates(
    store: &dyn RatingStore,
    subject_id: Uuid,
    subject_vector: &UserVector,
) -> MatchResult<HashSet<Uuid>> {
    if subject_vector.is_empty() {
        return Ok(HashSet::new());
    }

    let items = subject_vector.item_keys();
    let mut raters = store.raters_of_any(&items).await?;
    raters.remove(&subject_id);

    debug!(
        "Found {} candidates for user {} across {} rated items",
        raters.len(),
        subject_id,
        items.len()
    );
    Ok(raters)
}
