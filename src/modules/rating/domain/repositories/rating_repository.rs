use async_trait::async_trait;

use crate::modules::rating::domain::entities::{Rating, RatingDraft};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::domain::value_objects::{MediaCategory, MediaKey};
use crate::shared::errors::AppResult;

/// Storage collaborator for user ratings.
///
/// At most one rating exists per (user, media id, category).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Create the rating, or update the existing one in place
    async fn upsert_rating(&self, user_id: &str, key: &MediaKey, draft: RatingDraft)
        -> AppResult<Rating>;

    async fn get_rating(&self, user_id: &str, key: &MediaKey) -> AppResult<Option<Rating>>;

    /// Newest first
    async fn list_ratings(
        &self,
        user_id: &str,
        category: MediaCategory,
        page: PaginationParams,
    ) -> AppResult<PaginatedResult<Rating>>;

    /// Whether a rating existed
    async fn delete_rating(&self, user_id: &str, key: &MediaKey) -> AppResult<bool>;
}
