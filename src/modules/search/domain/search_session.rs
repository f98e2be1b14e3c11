use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::provider::domain::entities::MediaSummary;
use crate::shared::domain::value_objects::MediaCategory;

/// Outcome of one category within a search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResults {
    /// Provider order, capped for display
    pub items: Vec<MediaSummary>,
    /// The provider call failed; `items` is empty
    pub failed: bool,
    /// Total the provider reported, before capping
    pub total_results: u64,
}

impl CategoryResults {
    pub fn loaded(items: Vec<MediaSummary>, total_results: u64) -> Self {
        Self {
            items,
            failed: false,
            total_results,
        }
    }

    pub fn failed() -> Self {
        Self {
            items: Vec::new(),
            failed: true,
            total_results: 0,
        }
    }
}

/// Ephemeral result set for one query.
///
/// Every category is always present, empty when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSession {
    pub query: String,
    results: BTreeMap<MediaCategory, CategoryResults>,
    pub loading: bool,
    /// Sequence number of the call that produced this session (0 = none)
    pub generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::empty("")
    }
}

impl SearchSession {
    /// Cleared state: all categories empty, nothing in flight
    pub fn empty(query: impl Into<String>) -> Self {
        let results = MediaCategory::DISPLAY_ORDER
            .iter()
            .map(|category| (*category, CategoryResults::default()))
            .collect();

        Self {
            query: query.into(),
            results,
            loading: false,
            generation: 0,
        }
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn set_results(&mut self, category: MediaCategory, results: CategoryResults) {
        self.results.insert(category, results);
    }

    pub fn category(&self, category: MediaCategory) -> &[MediaSummary] {
        self.results
            .get(&category)
            .map(|r| r.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn category_results(&self, category: MediaCategory) -> Option<&CategoryResults> {
        self.results.get(&category)
    }

    pub fn has_error(&self, category: MediaCategory) -> bool {
        self.results.get(&category).is_some_and(|r| r.failed)
    }

    /// Categories whose provider call failed, in display order
    pub fn failed_categories(&self) -> Vec<MediaCategory> {
        MediaCategory::DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|category| self.has_error(*category))
            .collect()
    }

    /// Sum of provider-reported totals across categories
    pub fn total_results(&self) -> u64 {
        self.results.values().map(|r| r.total_results).sum()
    }

    /// Number of displayed items across categories
    pub fn displayed_count(&self) -> usize {
        self.results.values().map(|r| r.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed_count() == 0
    }
}
