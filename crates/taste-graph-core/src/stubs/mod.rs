//! In-memory store implementations for tests and development.
//!
//! Both stubs are thread-safe (`DashMap`-backed) and implement the store
//! traits with real semantics, not mocks: the rating store keeps a
//! per-item inverted index so `raters_of_any` is a hash-join, and the user
//! store implements atomic wholesale replacement with stale-candidate
//! drop. Neither persists anything; data is lost on drop.
//!
//! For production, the traits are implemented against the surrounding
//! service's relational storage, which is out of scope here.

mod rating_store_stub;
mod user_store_stub;

pub use rating_store_stub::InMemoryRatingStore;
pub use user_store_stub::InMemoryUserStore;
