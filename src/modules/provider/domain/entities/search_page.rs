use serde::{Deserialize, Serialize};

use super::MediaSummary;

/// One page of normalized results as reported by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<MediaSummary>,
    /// 1-based, regardless of the provider's native indexing
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

impl SearchPage {
    pub fn new(results: Vec<MediaSummary>, page: u32, total_pages: u32, total_results: u64) -> Self {
        Self {
            results,
            page,
            total_pages,
            total_results,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Episodes of one TV season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDetail {
    pub season_number: u32,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub episodes: Vec<EpisodeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSummary {
    pub episode_number: u32,
    pub name: String,
    pub air_date: Option<String>,
    pub runtime: Option<u32>,
    pub rating: Option<f32>,
}
