use std::collections::HashMap;
use std::sync::Arc;

use super::{AniListAdapter, GoogleBooksAdapter, TmdbAdapter};
use crate::modules::provider::traits::MediaProviderClient;
use crate::shared::config::AppConfig;
use crate::shared::domain::value_objects::MediaCategory;

/// Category-keyed adapter table
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    clients: HashMap<MediaCategory, Arc<dyn MediaProviderClient>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One live adapter per category
    pub fn from_config(config: &AppConfig) -> Self {
        if config.tmdb_access_token.is_none() {
            log::warn!("TMDB_ACCESS_TOKEN is not set, movie and tv results will be empty");
        }

        Self::new()
            .with(Arc::new(AniListAdapter::new(config)))
            .with(Arc::new(TmdbAdapter::movies(config)))
            .with(Arc::new(TmdbAdapter::tv(config)))
            .with(Arc::new(GoogleBooksAdapter::new(config)))
    }

    /// Register a client under its own category, replacing any previous one
    pub fn register(&mut self, client: Arc<dyn MediaProviderClient>) {
        let category = client.category();
        if let Some(previous) = self.clients.insert(category, client) {
            log::debug!(
                "Replaced {} client for category {}",
                previous.provider_name(),
                category
            );
        }
    }

    pub fn with(mut self, client: Arc<dyn MediaProviderClient>) -> Self {
        self.register(client);
        self
    }

    pub fn get(&self, category: MediaCategory) -> Option<Arc<dyn MediaProviderClient>> {
        self.clients.get(&category).cloned()
    }

    /// Registered categories in display order
    pub fn categories(&self) -> Vec<MediaCategory> {
        MediaCategory::DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|category| self.clients.contains_key(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let providers: Vec<_> = self
            .categories()
            .into_iter()
            .filter_map(|c| self.clients.get(&c).map(|client| (c, client.provider_name())))
            .collect();
        f.debug_struct("ProviderRegistry")
            .field("providers", &providers)
            .finish()
    }
}
