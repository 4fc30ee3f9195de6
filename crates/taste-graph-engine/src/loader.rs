//! Rating vector loader (pipeline stage 1).

use tracing::debug;
use uuid::Uuid;

use taste_graph_core::error::MatchResult;
use taste_graph_core::traits::RatingStore;
use taste_graph_core::types::UserVector;

/// Load the complete rating vector for `user_id`.
///
/// Read-only. Returns an empty vector (not an error) for users who have
/// never rated anything. Duplicate rows for the same item collapse
/// last-write-wins by `rated_at`.
pub async fn load_vector(store: &dyn RatingStore, user_id: Uuid) -> MatchResult<UserVector> {
    let ratings = store.ratings_by_user(user_id).await?;
    debug!("Loaded {} rating rows for user {}", ratings.len(), user_id);
    Ok(UserVector::from_ratings(user_id, ratings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taste_graph_core::stubs::InMemoryRatingStore;
    use taste_graph_core::types::{ItemKind, RatedItemKey, Rating};

    #[tokio::test]
    async fn test_load_vector() {
        let store = InMemoryRatingStore::new();
        let author = Uuid::new_v4();
        let item = RatedItemKey::new(Uuid::new_v4(), ItemKind::Film);
        store.insert(Rating::new(author, item, 6, Utc::now()).unwrap());

        let vector = load_vector(&store, author).await.unwrap();
        assert_eq!(vector.author_id, author);
        assert_eq!(vector.len(), 1);
        assert_eq!(vector.get(&item), Some(6));
    }

    #[tokio::test]
    async fn test_load_vector_for_non_rater_is_empty() {
        let store = InMemoryRatingStore::new();
        let vector = load_vector(&store, Uuid::new_v4()).await.unwrap();
        assert!(vector.is_empty());
    }
}
