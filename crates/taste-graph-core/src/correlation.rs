//! Pearson correlation over the shared-item overlap of two user vectors.
//!
//! The coefficient measures linear association between the two users'
//! scores on the items they have both rated:
//!
//! ```text
//! r = Σ(xi - x̄)(yi - ȳ) / sqrt(Σ(xi - x̄)² · Σ(yi - ȳ)²)
//! ```
//!
//! # Degenerate-variance policy
//!
//! If either denominator sum is zero (a single shared item, or constant
//! scores on either side) the coefficient is defined as 0: neutral
//! similarity, never an error. Sparse and constant-score data stay
//! eligible for ranking, and the engine never fails on them.

use crate::types::{SimilarityScore, UserVector};

/// Pearson product-moment coefficient of two equal-length sequences.
///
/// Returns 0.0 for empty input and whenever either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len();
    if n == 0 {
        return 0.0;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0_f64;
    let mut var_x = 0.0_f64;
    let mut var_y = 0.0_f64;

    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        cov / denom
    }
}

/// Correlate the subject's vector against one candidate's vector.
///
/// Scores are paired over the shared items in sorted key order. Returns
/// `None` when the overlap is empty, which the engine treats as a
/// read-phase race (the candidate's overlapping ratings vanished between
/// discovery and load) and skips silently.
pub fn correlate(subject: &UserVector, candidate: &UserVector) -> Option<SimilarityScore> {
    let shared = subject.shared_items(candidate);
    if shared.is_empty() {
        return None;
    }

    let mut xs = Vec::with_capacity(shared.len());
    let mut ys = Vec::with_capacity(shared.len());
    for key in &shared {
        if let (Some(x), Some(y)) = (subject.get(key), candidate.get(key)) {
            xs.push(f64::from(x));
            ys.push(f64::from(y));
        }
    }

    Some(SimilarityScore {
        subject_id: subject.author_id,
        candidate_id: candidate.author_id,
        coefficient: pearson(&xs, &ys),
        overlap: xs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemKind, RatedItemKey, Rating, UserVector};
    use chrono::Utc;
    use uuid::Uuid;

    fn key(id: u128) -> RatedItemKey {
        RatedItemKey::new(Uuid::from_u128(id), ItemKind::Film)
    }

    fn vector(author: Uuid, scores: &[(u128, u8)]) -> UserVector {
        let ratings = scores
            .iter()
            .map(|&(id, score)| Rating::new(author, key(id), score, Utc::now()).unwrap())
            .collect();
        UserVector::from_ratings(author, ratings)
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((r - 1.0).abs() < 1e-9, "Expected 1.0, got {}", r);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let r = pearson(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]);
        assert!((r + 1.0).abs() < 1e-9, "Expected -1.0, got {}", r);
    }

    #[test]
    fn test_pearson_single_sample_is_zero() {
        assert_eq!(pearson(&[6.0], &[4.0]), 0.0);
    }

    #[test]
    fn test_pearson_constant_side_is_zero() {
        // Zero variance on one side only, n > 1
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]), 0.0);
        assert_eq!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_pearson_empty_is_zero() {
        assert_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn test_correlate_known_negative() {
        // Subject {A=6, B=7, C=10} vs candidate {A=4, B=8, C=4}
        // gives r = -1/sqrt(13) ≈ -0.2774
        let subject = vector(Uuid::new_v4(), &[(1, 6), (2, 7), (3, 10)]);
        let candidate = vector(Uuid::new_v4(), &[(1, 4), (2, 8), (3, 4)]);

        let score = correlate(&subject, &candidate).unwrap();
        assert_eq!(score.overlap, 3);
        let expected = -1.0 / 13.0_f64.sqrt();
        assert!(
            (score.coefficient - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            score.coefficient
        );
    }

    #[test]
    fn test_correlate_known_positive() {
        // Subject {A=6, B=7, C=10} vs candidate {A=8, B=6, C=8}
        // gives r = +1/sqrt(13) ≈ 0.2774
        let subject = vector(Uuid::new_v4(), &[(1, 6), (2, 7), (3, 10)]);
        let candidate = vector(Uuid::new_v4(), &[(1, 8), (2, 6), (3, 8)]);

        let score = correlate(&subject, &candidate).unwrap();
        let expected = 1.0 / 13.0_f64.sqrt();
        assert!(
            (score.coefficient - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            score.coefficient
        );
    }

    #[test]
    fn test_correlate_anti_correlated_pair() {
        // Two shared items, perfectly anti-correlated: subject A=6, C=10
        // vs candidate A=9, C=5
        let subject = vector(Uuid::new_v4(), &[(1, 6), (2, 7), (3, 10)]);
        let candidate = vector(Uuid::new_v4(), &[(1, 9), (3, 5)]);

        let score = correlate(&subject, &candidate).unwrap();
        assert_eq!(score.overlap, 2);
        assert!(
            (score.coefficient + 1.0).abs() < 1e-9,
            "Expected -1.0, got {}",
            score.coefficient
        );
    }

    #[test]
    fn test_correlate_single_shared_item() {
        // Overlap of one: degenerate variance, coefficient 0, still a score
        let subject = vector(Uuid::new_v4(), &[(1, 6)]);
        let candidate = vector(Uuid::new_v4(), &[(1, 4), (2, 9), (3, 2)]);

        let score = correlate(&subject, &candidate).unwrap();
        assert_eq!(score.overlap, 1);
        assert_eq!(score.coefficient, 0.0);
    }

    #[test]
    fn test_correlate_no_overlap_is_none() {
        let subject = vector(Uuid::new_v4(), &[(1, 6)]);
        let candidate = vector(Uuid::new_v4(), &[(2, 6)]);

        assert!(correlate(&subject, &candidate).is_none());
    }

    #[test]
    fn test_correlate_ignores_non_shared_items() {
        // Non-shared items must not influence the coefficient
        let subject_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();

        let subject = vector(subject_id, &[(1, 2), (2, 4), (3, 6)]);
        let bare = vector(candidate_id, &[(1, 1), (2, 2), (3, 3)]);
        let padded = vector(candidate_id, &[(1, 1), (2, 2), (3, 3), (4, 10), (5, 1)]);

        let a = correlate(&subject, &bare).unwrap();
        let b = correlate(&subject, &padded).unwrap();
        assert_eq!(a.coefficient, b.coefficient);
        assert_eq!(a.overlap, b.overlap);
    }

    #[test]
    fn test_coefficient_within_bounds() {
        let subject = vector(Uuid::new_v4(), &[(1, 1), (2, 10), (3, 5), (4, 7)]);
        let candidate = vector(Uuid::new_v4(), &[(1, 9), (2, 2), (3, 5), (4, 3)]);

        let score = correlate(&subject, &candidate).unwrap();
        assert!(score.coefficient >= -1.0 - 1e-9);
        assert!(score.coefficient <= 1.0 + 1e-9);
    }
}
