//! Ephemeral correlation results.

use uuid::Uuid;

/// Outcome of correlating the subject against one candidate.
///
/// Exists only during one computation pass; the ranker consumes these and
/// only the candidate identifiers survive into [`TopMatches`].
///
/// [`TopMatches`]: crate::types::TopMatches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    /// The user the run was triggered for.
    pub subject_id: Uuid,
    /// The candidate being scored.
    pub candidate_id: Uuid,
    /// Pearson coefficient in [-1, 1]; 0 under the degenerate-variance
    /// policy.
    pub coefficient: f64,
    /// Number of items both users rated. Always >= 1: the candidate finder
    /// only admits users that share at least one item.
    pub overlap: usize,
}
