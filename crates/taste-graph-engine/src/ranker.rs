//! Top-K ranker (pipeline stage 4, ranking half).

use std::cmp::Ordering;

use uuid::Uuid;

use taste_graph_core::types::SimilarityScore;

/// Rank similarity scores and keep the best `k` candidate identifiers.
///
/// Sorts by coefficient descending. Equal coefficients break by candidate
/// identifier ascending: the tie order is not semantically load-bearing,
/// but it must be deterministic so repeated runs over the same data commit
/// the same list.
pub fn rank(mut scores: Vec<SimilarityScore>, k: usize) -> Vec<Uuid> {
    scores.sort_by(|a, b| {
        b.coefficient
            .partial_cmp(&a.coefficient)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });
    scores.truncate(k);

    scores.into_iter().map(|s| s.candidate_id).collect()
}
