//! AniList provider adapter
//!
//! GraphQL-based adapter for the AniList API. Every operation is a single POST
//! against the GraphQL endpoint.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    modules::provider::{
        domain::entities::{MediaDetail, SearchPage},
        infrastructure::{adapters::mapper::MediaMapper, http_client::ProviderHttpClient},
        traits::MediaProviderClient,
    },
    shared::{
        config::AppConfig,
        domain::value_objects::{MediaCategory, MediaId},
        errors::{ProviderError, ProviderResult},
    },
};

use super::{mapper::AniListMapper, models::*, queries::*};

pub const PROVIDER_NAME: &str = "AniList";
pub const PER_PAGE: u32 = 20;

/// AniList provider adapter with GraphQL API
pub struct AniListAdapter {
    http_client: ProviderHttpClient,
    base_url: String,
    mapper: AniListMapper,
}

impl AniListAdapter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http_client: ProviderHttpClient::new(
                MediaCategory::Anime,
                PROVIDER_NAME,
                config.request_timeout,
            ),
            base_url: config.anilist_url.clone(),
            mapper: AniListMapper::new(),
        }
    }

    /// Make a GraphQL request to AniList API
    async fn make_graphql_request<T>(&self, query: &str, variables: Value) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = json!({
            "query": query,
            "variables": variables,
        });

        log::debug!("AniList: Sending GraphQL request with variables: {}", variables);

        let response: AniListResponse<T> = self.http_client.post_json(&self.base_url, &body).await?;
        unwrap_graphql(response)
    }

    async fn fetch_page(&self, query: &str, variables: Value, page: u32) -> ProviderResult<SearchPage> {
        let response: AniListSearchResponse = self.make_graphql_request(query, variables).await?;
        Ok(self.mapper.map_page(&response.page, page))
    }
}

/// Check for GraphQL errors and extract the data field
pub(crate) fn unwrap_graphql<T>(response: AniListResponse<T>) -> ProviderResult<T> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        log::error!("AniList: GraphQL errors in response: {:?}", errors);
        if let Some(status) = errors.iter().find_map(|e| e.status) {
            return Err(ProviderError::Status {
                category: MediaCategory::Anime,
                status: u16::try_from(status).unwrap_or(500),
            });
        }
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ProviderError::Transport {
            category: MediaCategory::Anime,
            message: format!("AniList GraphQL errors: {}", message),
        });
    }

    response.data.ok_or_else(|| ProviderError::Parse {
        category: MediaCategory::Anime,
        message: "No data field in AniList response".to_string(),
    })
}

#[async_trait]
impl MediaProviderClient for AniListAdapter {
    fn category(&self) -> MediaCategory {
        MediaCategory::Anime
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(&self, query: &str, page: u32) -> ProviderResult<SearchPage> {
        let page = page.max(1);
        let variables = json!({
            "search": query,
            "page": page,
            "perPage": PER_PAGE,
        });

        log::info!("AniList: Searching for '{}' (page: {})", query, page);

        let results = self.fetch_page(ANIME_SEARCH_QUERY, variables, page).await?;

        log::info!(
            "AniList: Found {} results for '{}'",
            results.results.len(),
            query
        );
        Ok(results)
    }

    async fn fetch_by_id(&self, id: &MediaId) -> ProviderResult<MediaDetail> {
        let anime_id = id.as_numeric().ok_or_else(|| ProviderError::InvalidId {
            category: MediaCategory::Anime,
            id: id.clone(),
        })?;

        log::info!("AniList: Getting anime by ID '{}'", anime_id);

        let response: AniListMediaResponse = match self
            .make_graphql_request(MEDIA_DETAIL_QUERY, json!({ "id": anime_id }))
            .await
        {
            Ok(response) => response,
            Err(ProviderError::Status { status: 404, .. }) => {
                log::info!("AniList: No anime found for ID '{}'", anime_id);
                return Err(ProviderError::NotFound {
                    category: MediaCategory::Anime,
                    id: id.clone(),
                });
            }
            Err(e) => return Err(e),
        };

        let media = response.media.ok_or_else(|| ProviderError::NotFound {
            category: MediaCategory::Anime,
            id: id.clone(),
        })?;

        Ok(self.mapper.map_detail(&media))
    }

    async fn popular(&self, page: u32) -> ProviderResult<SearchPage> {
        let page = page.max(1);
        let variables = json!({
            "page": page,
            "perPage": PER_PAGE,
            "sort": ["POPULARITY_DESC"],
        });
        self.fetch_page(ANIME_RANKED_QUERY, variables, page).await
    }

    async fn top_rated(&self, page: u32) -> ProviderResult<SearchPage> {
        let page = page.max(1);
        let variables = json!({
            "page": page,
            "perPage": PER_PAGE,
            "sort": ["SCORE_DESC"],
        });
        self.fetch_page(ANIME_RANKED_QUERY, variables, page).await
    }

    async fn by_genre(&self, genre: &str, page: u32) -> ProviderResult<SearchPage> {
        let page = page.max(1);
        let variables = json!({
            "genre": genre,
            "page": page,
            "perPage": PER_PAGE,
        });
        self.fetch_page(ANIME_GENRE_QUERY, variables, page).await
    }
}
