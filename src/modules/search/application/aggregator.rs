//! Cross-category search fan-out
//!
//! One `search(query, 1)` per category, issued together and joined. A failing
//! provider becomes an empty, flagged category; the join itself never fails.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::modules::provider::application::ProviderService;
use crate::modules::provider::domain::entities::MediaDetail;
use crate::modules::provider::infrastructure::adapters::ProviderRegistry;
use crate::modules::search::domain::{CategoryResults, SearchSession};
use crate::shared::config::DEFAULT_RESULT_CAP;
use crate::shared::domain::value_objects::{MediaCategory, MediaKey};
use crate::shared::errors::DetailFetchError;
use crate::shared::utils::{LogContext, TimedOperation};

#[derive(Clone, Debug)]
pub struct SearchAggregator {
    providers: ProviderService,
    result_cap: usize,
}

impl SearchAggregator {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            providers: ProviderService::new(registry),
            result_cap: DEFAULT_RESULT_CAP,
        }
    }

    /// Per-category display cap
    pub fn with_result_cap(mut self, result_cap: usize) -> Self {
        self.result_cap = result_cap;
        self
    }

    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    pub fn providers(&self) -> &ProviderService {
        &self.providers
    }

    /// Search every category at once.
    ///
    /// A blank query returns the cleared session without touching any provider.
    pub async fn unified_search(&self, query: &str) -> SearchSession {
        let query = query.trim();
        if query.is_empty() {
            debug!("Blank query, returning cleared session");
            return SearchSession::empty("");
        }

        LogContext::search_operation(query, None, None);
        let timer = TimedOperation::new("unified_search");

        let searches = MediaCategory::DISPLAY_ORDER
            .iter()
            .map(|&category| async move { (category, self.search_category(category, query).await) });
        let outcomes = join_all(searches).await;

        let mut session = SearchSession::empty(query);
        for (category, results) in outcomes {
            session.set_results(category, results);
        }

        let failed = session.failed_categories();
        info!(
            query = %query,
            displayed = session.displayed_count(),
            failed = failed.len(),
            "Unified search completed"
        );
        timer.finish_with_info(&format!("{} results", session.displayed_count()));

        session
    }

    async fn search_category(&self, category: MediaCategory, query: &str) -> CategoryResults {
        let Some(client) = self.providers.registry().get(category) else {
            warn!(%category, "No provider registered, category left empty");
            return CategoryResults::failed();
        };

        match client.search(query, 1).await {
            Ok(page) => {
                let mut items = page.results;
                items.truncate(self.result_cap);
                LogContext::search_operation(query, Some(client.provider_name()), Some(items.len()));
                CategoryResults::loaded(items, page.total_results)
            }
            Err(e) => {
                LogContext::provider_failure(client.provider_name(), category, "search", &e);
                CategoryResults::failed()
            }
        }
    }

    /// Lazy detail load for one item; failures surface to the caller
    pub async fn fetch_detail(&self, key: &MediaKey) -> Result<MediaDetail, DetailFetchError> {
        self.providers.fetch_detail(key).await
    }
}
