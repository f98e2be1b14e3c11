use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::domain::value_objects::{MediaCategory, MediaId, MediaKey};
use crate::shared::errors::{AppError, AppResult};

/// User ratings use one 10-point scale for every category
pub const MAX_USER_RATING: f32 = 10.0;

/// Where the user is with an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
    OnHold,
    Dropped,
}

impl fmt::Display for RatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RatingStatus::Completed => "completed",
            RatingStatus::InProgress => "in_progress",
            RatingStatus::Planned => "planned",
            RatingStatus::OnHold => "on_hold",
            RatingStatus::Dropped => "dropped",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for RatingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(RatingStatus::Completed),
            "in_progress" | "watching" | "reading" => Ok(RatingStatus::InProgress),
            "planned" | "plan_to_watch" | "plan_to_read" => Ok(RatingStatus::Planned),
            "on_hold" => Ok(RatingStatus::OnHold),
            "dropped" => Ok(RatingStatus::Dropped),
            other => Err(AppError::InvalidInput(format!(
                "Unknown rating status: {}",
                other
            ))),
        }
    }
}

/// Validated score with one decimal of precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct RatingValue(f32);

impl RatingValue {
    pub fn new(value: f32) -> AppResult<Self> {
        if !value.is_finite() || !(0.0..=MAX_USER_RATING).contains(&value) {
            return Err(AppError::ValidationError(format!(
                "Rating must be between 0 and {}",
                MAX_USER_RATING
            )));
        }
        Ok(Self(round_one_decimal(value)))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for RatingValue {
    type Error = AppError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        RatingValue::new(value)
    }
}

impl From<RatingValue> for f32 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

/// Round half away from zero to one decimal
pub fn round_one_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// What the user submits; the repository stamps identity and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDraft {
    pub rating: RatingValue,
    pub note: Option<String>,
    pub status: RatingStatus,
}

impl RatingDraft {
    pub fn new(rating: RatingValue) -> Self {
        Self {
            rating,
            note: None,
            status: RatingStatus::default(),
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn with_status(mut self, status: RatingStatus) -> Self {
        self.status = status;
        self
    }
}

/// A user's stored rating, keyed by (user, media id, category)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub user_id: String,
    pub media_id: MediaId,
    pub category: MediaCategory,
    pub rating: RatingValue,
    pub note: Option<String>,
    pub status: RatingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: impl Into<String>, key: MediaKey, draft: RatingDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            media_id: key.id,
            category: key.category,
            rating: draft.rating,
            note: draft.note,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.category, self.media_id.clone())
    }

    /// Overwrite the user-editable fields, keeping id and creation time
    pub fn apply(&mut self, draft: RatingDraft) {
        self.rating = draft.rating;
        self.note = draft.note;
        self.status = draft.status;
        self.updated_at = Utc::now();
    }
}

/// Count and average for one category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryRatingStats {
    pub count: usize,
    /// One decimal, 0 when there are no ratings
    pub average: f32,
}

impl CategoryRatingStats {
    pub fn from_ratings(ratings: &[Rating], count: usize) -> Self {
        if ratings.is_empty() {
            return Self { count, average: 0.0 };
        }
        let sum: f32 = ratings.iter().map(|r| r.rating.value()).sum();
        Self {
            count,
            average: round_one_decimal(sum / ratings.len() as f32),
        }
    }
}
