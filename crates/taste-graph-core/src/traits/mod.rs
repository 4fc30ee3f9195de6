//! Store traits at the engine's external boundary.
//!
//! The matching engine consumes exactly two collaborators:
//!
//! - [`RatingStore`]: read-only access to the global rating corpus
//! - [`UserAccountStore`]: account existence checks and atomic replacement
//!   of the owned top-matches relation
//!
//! Everything behind these traits (relational tables, caches, the service
//! layer's CRUD surface) is out of scope for this engine.

mod rating_store;
mod user_store;

pub use rating_store::RatingStore;
pub use user_store::UserAccountStore;
