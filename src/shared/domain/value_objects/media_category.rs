use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Supported media kinds, one per provider adapter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaCategory {
    /// TMDB movies
    #[serde(rename = "movie")]
    Movie,
    /// TMDB television series
    #[serde(rename = "tv")]
    Tv,
    /// AniList GraphQL API
    #[serde(rename = "anime")]
    Anime,
    /// Google Books volumes
    #[serde(rename = "book")]
    Book,
}

impl MediaCategory {
    /// Order used when concatenating categories into the "all" view
    pub const DISPLAY_ORDER: [MediaCategory; 4] = [
        MediaCategory::Movie,
        MediaCategory::Tv,
        MediaCategory::Anime,
        MediaCategory::Book,
    ];

    /// Upper bound of the rating scale for this category.
    ///
    /// Books keep Google's native 0-5 scale; everything else is 0-10.
    pub fn rating_scale(&self) -> f32 {
        match self {
            MediaCategory::Book => 5.0,
            _ => 10.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Movie => "movie",
            MediaCategory::Tv => "tv",
            MediaCategory::Anime => "anime",
            MediaCategory::Book => "book",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaCategory::Movie),
            "tv" => Ok(MediaCategory::Tv),
            "anime" => Ok(MediaCategory::Anime),
            "book" | "books" => Ok(MediaCategory::Book),
            other => Err(AppError::InvalidInput(format!(
                "Unknown media category: {}",
                other
            ))),
        }
    }
}

/// Tab selection over a search session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MediaCategory),
}

impl From<MediaCategory> for CategoryFilter {
    fn from(category: MediaCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<MediaCategory>().map(CategoryFilter::Only)
    }
}
