//! In-process implementations of the rating collaborators

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::RwLock;

use crate::modules::rating::domain::{
    CurrentUserProvider, Rating, RatingDraft, RatingRepository, User,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::domain::value_objects::{MediaCategory, MediaKey};
use crate::shared::errors::AppResult;

type RatingKey = (String, MediaKey);

/// DashMap-backed rating store
#[derive(Debug, Default)]
pub struct InMemoryRatingRepository {
    ratings: DashMap<RatingKey, Rating>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert_rating(
        &self,
        user_id: &str,
        key: &MediaKey,
        draft: RatingDraft,
    ) -> AppResult<Rating> {
        let rating = match self.ratings.entry((user_id.to_string(), key.clone())) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().apply(draft);
                occupied.get().clone()
            }
            Entry::Vacant(vacant) => vacant
                .insert(Rating::new(user_id, key.clone(), draft))
                .value()
                .clone(),
        };
        Ok(rating)
    }

    async fn get_rating(&self, user_id: &str, key: &MediaKey) -> AppResult<Option<Rating>> {
        Ok(self
            .ratings
            .get(&(user_id.to_string(), key.clone()))
            .map(|entry| entry.value().clone()))
    }

    async fn list_ratings(
        &self,
        user_id: &str,
        category: MediaCategory,
        page: PaginationParams,
    ) -> AppResult<PaginatedResult<Rating>> {
        let mut matching: Vec<Rating> = self
            .ratings
            .iter()
            .filter(|entry| entry.key().0 == user_id && entry.value().category == category)
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let total = matching.len();
        Ok(PaginatedResult::new(page.apply(matching), total))
    }

    async fn delete_rating(&self, user_id: &str, key: &MediaKey) -> AppResult<bool> {
        Ok(self
            .ratings
            .remove(&(user_id.to_string(), key.clone()))
            .is_some())
    }
}

/// Auth stand-in holding a fixed (or no) signed-in user
#[derive(Debug, Default)]
pub struct StaticUserProvider {
    user: RwLock<Option<User>>,
}

impl StaticUserProvider {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn set_user(&self, user: Option<User>) {
        match self.user.write() {
            Ok(mut guard) => *guard = user,
            Err(poisoned) => *poisoned.into_inner() = user,
        }
    }
}

#[async_trait]
impl CurrentUserProvider for StaticUserProvider {
    async fn get_current_user(&self) -> Option<User> {
        match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
