//! Google Books provider adapter
//!
//! REST adapter over `/volumes`. The API key is optional and only sent when
//! it looks like a real key.

use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::{
    modules::provider::{
        domain::entities::{MediaDetail, SearchPage},
        infrastructure::{
            adapters::mapper::MediaMapper,
            http_client::{build_url, ProviderHttpClient},
        },
        traits::MediaProviderClient,
    },
    shared::{
        config::AppConfig,
        domain::value_objects::{MediaCategory, MediaId},
        errors::{ProviderError, ProviderResult},
    },
};

use super::{mapper::GoogleBooksMapper, models::*};

pub const PROVIDER_NAME: &str = "Google Books";
pub const MAX_RESULTS: u32 = 20;
pub const NEW_RELEASES_RESULTS: u32 = 10;
const POPULAR_QUERY: &str = "bestseller OR popular OR award";

pub struct GoogleBooksAdapter {
    http_client: ProviderHttpClient,
    base_url: String,
    api_key: Option<String>,
    mapper: GoogleBooksMapper,
}

impl GoogleBooksAdapter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http_client: ProviderHttpClient::new(
                MediaCategory::Book,
                PROVIDER_NAME,
                config.request_timeout,
            ),
            base_url: config.google_books_url.clone(),
            api_key: config.valid_google_books_key().map(str::to_string),
            mapper: GoogleBooksMapper::new(),
        }
    }

    /// Whether requests carry an API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Google Books pages by item offset, starting at 0
    pub fn start_index(page: u32) -> u32 {
        Self::offset(page, MAX_RESULTS)
    }

    fn offset(page: u32, per_page: u32) -> u32 {
        page.max(1).saturating_sub(1).saturating_mul(per_page)
    }

    /// Query parameters for a `/volumes` listing, without the key
    pub fn volume_params(
        q: String,
        order_by: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", q),
            ("startIndex", Self::offset(page, per_page).to_string()),
            ("maxResults", per_page.to_string()),
        ];
        if let Some(order_by) = order_by {
            params.push(("orderBy", order_by.to_string()));
        }
        params
    }

    /// Books published in `year`
    pub fn new_releases_query(year: i32) -> String {
        format!("date:{}", year)
    }

    fn with_key(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }

    async fn volumes(
        &self,
        q: String,
        order_by: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> ProviderResult<SearchPage> {
        let params = Self::volume_params(q, order_by, page, per_page);
        let url = build_url(&self.base_url, "/volumes", &self.with_key(params));
        let response: VolumesResponse = self.http_client.get(&url, None).await?;
        Ok(self.mapper.map_page(&response, page, per_page))
    }
}

#[async_trait]
impl MediaProviderClient for GoogleBooksAdapter {
    fn category(&self) -> MediaCategory {
        MediaCategory::Book
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(&self, query: &str, page: u32) -> ProviderResult<SearchPage> {
        log::info!("Google Books: Searching for '{}' (page: {})", query, page);

        let results = self.volumes(query.to_string(), None, page, MAX_RESULTS).await?;

        log::info!(
            "Google Books: Found {} results for '{}'",
            results.results.len(),
            query
        );
        Ok(results)
    }

    async fn fetch_by_id(&self, id: &MediaId) -> ProviderResult<MediaDetail> {
        let volume_id = id.to_string();
        if volume_id.trim().is_empty() {
            return Err(ProviderError::InvalidId {
                category: MediaCategory::Book,
                id: id.clone(),
            });
        }

        log::info!("Google Books: Getting volume '{}'", volume_id);

        let endpoint = format!("/volumes/{}", urlencoding::encode(&volume_id));
        let url = build_url(&self.base_url, &endpoint, &self.with_key(Vec::new()));

        match self.http_client.get::<Volume>(&url, None).await {
            Ok(volume) => Ok(self.mapper.map_detail(&volume)),
            Err(ProviderError::Status { status: 404, .. }) => {
                log::info!("Google Books: No volume found for ID '{}'", volume_id);
                Err(ProviderError::NotFound {
                    category: MediaCategory::Book,
                    id: id.clone(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn popular(&self, page: u32) -> ProviderResult<SearchPage> {
        self.volumes(POPULAR_QUERY.to_string(), Some("relevance"), page, MAX_RESULTS)
            .await
    }

    async fn new_releases(&self, page: u32) -> ProviderResult<SearchPage> {
        let query = Self::new_releases_query(Utc::now().year());
        self.volumes(query, Some("newest"), page, NEW_RELEASES_RESULTS)
            .await
    }

    async fn by_genre(&self, genre: &str, page: u32) -> ProviderResult<SearchPage> {
        self.volumes(format!("subject:{}", genre), Some("relevance"), page, MAX_RESULTS)
            .await
    }
}
