//! Matcher configuration and named constants.
//!
//! All thresholds and limits the engine uses live here: the rating scale,
//! the default match-list size, and the fan-out bound for candidate
//! correlation.

use serde::{Deserialize, Serialize};

/// Named constants for the matching engine.
pub mod constants {
    /// Bounds of the rating scale.
    ///
    /// Every score in the system is an integer in `[MIN, MAX]`.
    /// `Rating::new` rejects anything outside this range.
    pub mod score {
        /// Lowest valid score.
        pub const MIN: u8 = 1;

        /// Highest valid score.
        pub const MAX: u8 = 10;
    }

    /// Default size bound K for a committed match list.
    pub const DEFAULT_TOP_K: usize = 10;

    /// Default bound on concurrent candidate correlations within one run.
    ///
    /// Each in-flight correlation holds one rating-store read, so this is
    /// effectively the read-concurrency budget the engine imposes on the
    /// store.
    pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
}

/// Configuration for a matching run.
///
/// Controls the match-list size bound and the correlation fan-out width.
/// Consumed by the engine's `TasteMatcher`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum number of matches committed per subject (K).
    /// Default: 10
    pub top_k: usize,

    /// Maximum number of candidate correlations in flight at once.
    /// Default: 8
    pub max_concurrent_correlations: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            top_k: constants::DEFAULT_TOP_K,
            max_concurrent_correlations: constants::DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl MatcherConfig {
    /// Set the match-list size bound.
    #[inline]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the correlation fan-out bound.
    #[inline]
    pub fn with_max_concurrent_correlations(mut self, limit: usize) -> Self {
        self.max_concurrent_correlations = limit;
        self
    }
}
