use serde::{Deserialize, Serialize};

use crate::shared::domain::value_objects::{MediaCategory, MediaId, MediaKey, ReleaseMarker};

/// Placeholder used when a provider supplies no usable title
pub const UNTITLED: &str = "Untitled";

/// Normalized list-view record for one search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: MediaId,
    category: MediaCategory,
    pub title: String,
    pub image_url: Option<String>,
    /// 0-10 for anime/movie/tv, 0-5 for books
    pub rating: Option<f32>,
    pub year_or_date: ReleaseMarker,
    pub subtitle: Option<String>,
}

impl MediaSummary {
    pub fn new(id: impl Into<MediaId>, category: MediaCategory, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            title: title_or_placeholder(Some(title.into())),
            image_url: None,
            rating: None,
            year_or_date: ReleaseMarker::Tba,
            subtitle: None,
        }
    }

    /// Category is fixed at creation
    pub fn category(&self) -> MediaCategory {
        self.category
    }

    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.category, self.id.clone())
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url.filter(|url| !url.trim().is_empty());
        self
    }

    /// Clamp into the category's scale; NaN is dropped
    pub fn with_rating(mut self, rating: Option<f32>) -> Self {
        let scale = self.category.rating_scale();
        self.rating = rating
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(0.0, scale));
        self
    }

    pub fn with_release(mut self, release: ReleaseMarker) -> Self {
        self.year_or_date = release;
        self
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    /// One-decimal rating for display, `"N/A"` when unrated
    pub fn display_rating(&self) -> String {
        self.rating
            .map(|value| format!("{:.1}", value))
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// `"/5"` for books, `"/10"` otherwise
    pub fn rating_suffix(&self) -> &'static str {
        match self.category {
            MediaCategory::Book => "/5",
            _ => "/10",
        }
    }
}

/// First non-blank candidate, else [`UNTITLED`]
pub fn title_or_placeholder(title: Option<String>) -> String {
    title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}
