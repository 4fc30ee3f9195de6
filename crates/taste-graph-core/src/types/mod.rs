//! Domain types for the matching engine.
//!
//! - [`Rating`] / [`RatedItemKey`] / [`ItemKind`]: the raw rating rows this
//!   engine reads (written and edited elsewhere)
//! - [`UserVector`]: ephemeral per-user sparse vector, built fresh each run
//! - [`SimilarityScore`]: ephemeral result of one subject/candidate
//!   correlation
//! - [`TopMatches`]: the persisted, ordered, size-bounded match list owned
//!   by a subject account

mod rating;
mod similarity;
mod top_matches;
mod vector;

pub use rating::{ItemKind, RatedItemKey, Rating};
pub use similarity::SimilarityScore;
pub use top_matches::TopMatches;
pub use vector::UserVector;
