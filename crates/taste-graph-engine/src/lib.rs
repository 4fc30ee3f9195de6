//! Taste Graph Matching Engine
//!
//! Recomputes a user's persisted top-matches relation from the global
//! rating corpus. One exposed operation,
//! [`TasteMatcher::recompute_top_matches`], drives a four-stage pipeline:
//!
//! 1. [`loader`] - build the subject's sparse rating vector
//! 2. [`candidates`] - find every other user sharing at least one rated
//!    item (the sole admission filter)
//! 3. `correlation` (in `taste-graph-core`) - Pearson coefficient per
//!    candidate over the shared items, fanned out under a bounded worker
//!    pool
//! 4. [`ranker`] + commit - sort descending, truncate to K, atomically
//!    replace the subject's match list
//!
//! Runs are independent per subject; concurrent runs for the same subject
//! race at the commit and the last one wins, which is idempotent over
//! stable rating data.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taste_graph_core::stubs::{InMemoryRatingStore, InMemoryUserStore};
//! use taste_graph_engine::TasteMatcher;
//!
//! let ratings = Arc::new(InMemoryRatingStore::new());
//! let users = Arc::new(InMemoryUserStore::new());
//! let subject = users.create_user();
//! // ... insert ratings ...
//!
//! let matcher = TasteMatcher::new(ratings, users);
//! let committed = matcher.recompute_top_matches(subject).await?;
//! ```

pub mod candidates;
pub mod loader;
pub mod matcher;
pub mod ranker;

pub use matcher::TasteMatcher;
