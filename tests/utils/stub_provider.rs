use async_trait::async_trait;
use mediashelf::modules::provider::{MediaDetail, MediaProviderClient, MediaSummary, SearchPage};
use mediashelf::modules::provider::domain::DetailExtras;
use mediashelf::shared::domain::value_objects::{MediaCategory, MediaId};
use mediashelf::shared::errors::{ProviderError, ProviderResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Hand-written provider double with canned results, failures and delays
pub struct StubProvider {
    category: MediaCategory,
    results: Vec<MediaSummary>,
    error: Option<ProviderError>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(category: MediaCategory) -> Self {
        Self {
            category,
            results: Vec::new(),
            error: None,
            delays: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_results(mut self, results: Vec<MediaSummary>) -> Self {
        self.results = results;
        self
    }

    /// `count` numbered items titled "<category> <n>"
    pub fn with_generated(self, count: usize) -> Self {
        let category = self.category;
        self.with_results(
            (0..count as u64)
                .map(|id| MediaSummary::new(id, category, format!("{} {}", category, id)))
                .collect(),
        )
    }

    pub fn failing(mut self) -> Self {
        self.error = Some(ProviderError::Transport {
            category: self.category,
            message: "connection reset".to_string(),
        });
        self
    }

    pub fn timing_out(mut self) -> Self {
        self.error = Some(ProviderError::Timeout {
            category: self.category,
        });
        self
    }

    pub fn with_error(mut self, error: ProviderError) -> Self {
        self.error = Some(error);
        self
    }

    /// Delay responses to `query`
    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaProviderClient for StubProvider {
    fn category(&self) -> MediaCategory {
        self.category
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn search(&self, query: &str, page: u32) -> ProviderResult<SearchPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        // `{query}` in a canned title is replaced by the query
        let results = self
            .results
            .iter()
            .cloned()
            .map(|mut item| {
                if item.title.contains("{query}") {
                    item.title = item.title.replace("{query}", query);
                }
                item
            })
            .collect::<Vec<_>>();
        let total = results.len() as u64;
        Ok(SearchPage::new(results, page, 1, total))
    }

    async fn fetch_by_id(&self, id: &MediaId) -> ProviderResult<MediaDetail> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let summary = self
            .results
            .iter()
            .find(|item| &item.id == id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                category: self.category,
                id: id.clone(),
            })?;

        let extras = match self.category {
            MediaCategory::Anime => DetailExtras::Anime {
                episodes: None,
                duration: None,
                status: None,
                studios: Vec::new(),
            },
            MediaCategory::Movie => DetailExtras::Movie {
                runtime: None,
                tagline: None,
                status: None,
                release_date: None,
            },
            MediaCategory::Tv => DetailExtras::Tv {
                number_of_seasons: None,
                number_of_episodes: None,
                episode_run_time: Vec::new(),
                status: None,
                first_air_date: None,
            },
            MediaCategory::Book => DetailExtras::Book {
                authors: Vec::new(),
                page_count: None,
                publisher: None,
                published_date: None,
                language: None,
            },
        };
        Ok(MediaDetail::new(summary, extras))
    }
}
