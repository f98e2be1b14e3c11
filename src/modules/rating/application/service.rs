use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::modules::rating::domain::{
    CategoryRatingStats, CurrentUserProvider, Rating, RatingDraft, RatingRepository, RatingStatus,
    RatingValue, User,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::domain::value_objects::{MediaCategory, MediaKey};
use crate::shared::errors::{AppError, AppResult};

/// Upper bound on ratings read per category when computing stats
const STATS_WINDOW: usize = 5_000;

/// Per-category rating counts and averages for the signed-in user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRatingStats {
    pub by_category: BTreeMap<MediaCategory, CategoryRatingStats>,
}

impl UserRatingStats {
    pub fn get(&self, category: MediaCategory) -> CategoryRatingStats {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    pub fn total_count(&self) -> usize {
        self.by_category.values().map(|s| s.count).sum()
    }
}

pub struct RatingService {
    ratings: Arc<dyn RatingRepository>,
    users: Arc<dyn CurrentUserProvider>,
}

impl RatingService {
    pub fn new(ratings: Arc<dyn RatingRepository>, users: Arc<dyn CurrentUserProvider>) -> Self {
        Self { ratings, users }
    }

    async fn require_user(&self, action: &str) -> AppResult<User> {
        self.users.get_current_user().await.ok_or_else(|| {
            AppError::Unauthorized(format!("User must be authenticated to {}", action))
        })
    }

    /// Add or update the current user's rating for an item
    pub async fn add_rating(
        &self,
        key: &MediaKey,
        rating: f32,
        note: Option<String>,
        status: RatingStatus,
    ) -> AppResult<Rating> {
        let user = self.require_user("add ratings").await?;
        let draft = RatingDraft::new(RatingValue::new(rating)?)
            .with_note(note)
            .with_status(status);

        let saved = self.ratings.upsert_rating(&user.id, key, draft).await?;
        log::info!(
            "Saved rating {} for {} by user {}",
            saved.rating.value(),
            key,
            user.id
        );
        Ok(saved)
    }

    /// The current user's rating, `None` when signed out or unrated
    pub async fn get_user_rating(&self, key: &MediaKey) -> AppResult<Option<Rating>> {
        match self.users.get_current_user().await {
            Some(user) => self.ratings.get_rating(&user.id, key).await,
            None => Ok(None),
        }
    }

    /// One page of the current user's ratings in a category
    pub async fn ratings_by_category(
        &self,
        category: MediaCategory,
        page: PaginationParams,
    ) -> AppResult<PaginatedResult<Rating>> {
        match self.users.get_current_user().await {
            Some(user) => self.ratings.list_ratings(&user.id, category, page).await,
            None => Ok(PaginatedResult::empty()),
        }
    }

    /// Returns whether a rating was removed
    pub async fn remove_rating(&self, key: &MediaKey) -> AppResult<bool> {
        let user = self.require_user("remove ratings").await?;
        let removed = self.ratings.delete_rating(&user.id, key).await?;
        if removed {
            log::info!("Removed rating for {} by user {}", key, user.id);
        }
        Ok(removed)
    }

    /// Stats for every category, `None` when signed out
    pub async fn user_rating_stats(&self) -> AppResult<Option<UserRatingStats>> {
        let Some(user) = self.users.get_current_user().await else {
            return Ok(None);
        };

        let window = PaginationParams::new(STATS_WINDOW, 0);
        let lookups = MediaCategory::DISPLAY_ORDER.iter().map(|&category| {
            let user_id = user.id.as_str();
            async move {
                let page = self.ratings.list_ratings(user_id, category, window).await?;
                Ok::<_, AppError>((
                    category,
                    CategoryRatingStats::from_ratings(&page.items, page.total),
                ))
            }
        });

        let by_category = try_join_all(lookups).await?.into_iter().collect();
        Ok(Some(UserRatingStats { by_category }))
    }
}
