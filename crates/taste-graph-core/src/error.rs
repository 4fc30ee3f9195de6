//! Error types for taste-graph-core.
//!
//! This module defines [`MatchError`], the unified error type for the
//! matching engine, and the [`MatchResult`] alias used throughout both
//! crates.
//!
//! Only `UserNotFound` is a terminal failure of a recomputation run.
//! Empty vectors, empty candidate sets, degenerate variance, and stale
//! candidates are all absorbed by the engine and never surface here.

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the matching engine.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The subject user identifier does not resolve to an existing account.
    ///
    /// Raised before any computation begins, or at commit time if the
    /// account disappeared mid-run. Nothing is written in either case.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The identifier that failed to resolve
        user_id: Uuid,
    },

    /// A rating score fell outside the fixed scale.
    #[error("Invalid score {score}: must be in [{min}, {max}]")]
    InvalidScore {
        /// The rejected score
        score: u8,
        /// Lower bound of the scale
        min: u8,
        /// Upper bound of the scale
        max: u8,
    },

    /// The underlying store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A correlation worker panicked or was cancelled mid-run.
    #[error("Correlation task failed: {0}")]
    Task(String),
}

/// Result type alias using [`MatchError`].
pub type MatchResult<T> = Result<T, MatchError>;
