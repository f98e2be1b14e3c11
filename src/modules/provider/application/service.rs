use std::sync::Arc;

use crate::modules::provider::domain::entities::{MediaDetail, SearchPage, SeasonDetail};
use crate::modules::provider::infrastructure::adapters::ProviderRegistry;
use crate::modules::provider::traits::MediaProviderClient;
use crate::shared::domain::value_objects::{MediaCategory, MediaId, MediaKey};
use crate::shared::errors::{DetailFetchError, ProviderError, ProviderResult};
use crate::shared::utils::LogContext;

/// Application service for single-category provider operations.
///
/// Routes each call to the adapter registered for the category. Browsing
/// listings (popular, top rated, genre) and detail pages go through here; the
/// cross-category search lives in the search module.
#[derive(Clone, Debug)]
pub struct ProviderService {
    registry: Arc<ProviderRegistry>,
}

impl ProviderService {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    fn client(&self, category: MediaCategory) -> ProviderResult<Arc<dyn MediaProviderClient>> {
        self.registry
            .get(category)
            .ok_or(ProviderError::Unsupported {
                category,
                operation: "requests without a registered provider",
            })
    }

    /// Search one category
    pub async fn search(
        &self,
        category: MediaCategory,
        query: &str,
        page: u32,
    ) -> ProviderResult<SearchPage> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchPage::new(Vec::new(), 1, 0, 0));
        }
        self.client(category)?.search(query, page).await
    }

    /// Load one item's detail view
    pub async fn fetch_detail(&self, key: &MediaKey) -> Result<MediaDetail, DetailFetchError> {
        let client = self.client(key.category).map_err(|source| {
            log::warn!("Detail fetch for {} has no provider: {}", key, source);
            DetailFetchError::new(key.category, key.id.clone(), source)
        })?;

        client.fetch_by_id(&key.id).await.map_err(|source| {
            LogContext::provider_failure(client.provider_name(), key.category, "detail fetch", &source);
            DetailFetchError::new(key.category, key.id.clone(), source)
        })
    }

    pub async fn popular(&self, category: MediaCategory, page: u32) -> ProviderResult<SearchPage> {
        self.client(category)?.popular(page).await
    }

    pub async fn top_rated(&self, category: MediaCategory, page: u32) -> ProviderResult<SearchPage> {
        self.client(category)?.top_rated(page).await
    }

    /// Newest titles, where the provider offers such a listing
    pub async fn new_releases(&self, category: MediaCategory, page: u32) -> ProviderResult<SearchPage> {
        self.client(category)?.new_releases(page).await
    }

    pub async fn by_genre(
        &self,
        category: MediaCategory,
        genre: &str,
        page: u32,
    ) -> ProviderResult<SearchPage> {
        self.client(category)?.by_genre(genre, page).await
    }

    /// Episodes of one TV season
    pub async fn season(&self, id: &MediaId, season_number: u32) -> ProviderResult<SeasonDetail> {
        self.client(MediaCategory::Tv)?
            .season(id, season_number)
            .await
    }
}
