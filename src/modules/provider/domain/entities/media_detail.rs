use serde::{Deserialize, Serialize};

use super::MediaSummary;
use crate::shared::domain::value_objects::{MediaCategory, MediaKey};

/// Full record for one item, fetched lazily by `(category, id)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetail {
    #[serde(flatten)]
    pub summary: MediaSummary,
    pub overview: Option<String>,
    /// Provider order is preserved
    pub genres: Vec<String>,
    pub extras: DetailExtras,
}

impl MediaDetail {
    pub fn new(summary: MediaSummary, extras: DetailExtras) -> Self {
        Self {
            summary,
            overview: None,
            genres: Vec::new(),
            extras,
        }
    }

    pub fn with_overview(mut self, overview: Option<String>) -> Self {
        self.overview = overview.filter(|text| !text.trim().is_empty());
        self
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn category(&self) -> MediaCategory {
        self.summary.category()
    }

    pub fn key(&self) -> MediaKey {
        self.summary.key()
    }
}

/// Category-specific detail fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailExtras {
    #[serde(rename_all = "camelCase")]
    Anime {
        episodes: Option<u32>,
        /// Minutes per episode
        duration: Option<u32>,
        status: Option<String>,
        studios: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Movie {
        runtime: Option<u32>,
        tagline: Option<String>,
        status: Option<String>,
        release_date: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Tv {
        number_of_seasons: Option<u32>,
        number_of_episodes: Option<u32>,
        episode_run_time: Vec<u32>,
        status: Option<String>,
        first_air_date: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Book {
        authors: Vec<String>,
        page_count: Option<u32>,
        publisher: Option<String>,
        published_date: Option<String>,
        language: Option<String>,
    },
}

impl DetailExtras {
    pub fn category(&self) -> MediaCategory {
        match self {
            DetailExtras::Anime { .. } => MediaCategory::Anime,
            DetailExtras::Movie { .. } => MediaCategory::Movie,
            DetailExtras::Tv { .. } => MediaCategory::Tv,
            DetailExtras::Book { .. } => MediaCategory::Book,
        }
    }
}
