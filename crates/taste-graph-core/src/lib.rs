//! Taste Graph Core Library
//!
//! Provides the domain types, store traits, and correlation math for the
//! taste-graph user-similarity matching engine.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Rating`, `RatedItemKey`, `UserVector`, `SimilarityScore`,
//!   `TopMatches`)
//! - Store traits at the engine's external boundary (`RatingStore`,
//!   `UserAccountStore`)
//! - The Pearson correlation kernel with its degenerate-variance policy
//! - Error types and result aliases
//! - Configuration structures
//! - In-memory store stubs for tests and development
//!
//! The pipeline that drives these pieces (vector loading, candidate
//! discovery, parallel correlation, top-K commit) lives in
//! `taste-graph-engine`.
//!
//! # Example
//!
//! ```
//! use taste_graph_core::config::MatcherConfig;
//!
//! let config = MatcherConfig::default().with_top_k(5);
//! assert_eq!(config.top_k, 5);
//! ```

pub mod config;
pub mod correlation;
pub mod error;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::MatcherConfig;
pub use error::{MatchError, MatchResult};
