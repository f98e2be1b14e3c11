use crate::{
    modules::provider::{
        domain::entities::{MediaDetail, SearchPage, SeasonDetail},
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
use async_trait::async_trait;

use super::{mapper::TmdbMapper, models::*};

pub const PROVIDER_NAME: &str = "TMDB";
const LANGUAGE: &str = "en-US";

/// TMDB (The Movie Database) provider adapter with REST API.
/// One instance serves either movies or TV shows.
pub struct TmdbAdapter {
    http_client: ProviderHttpClient,
    base_url: String,
    access_token: Option<String>,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(kind: TmdbKind, config: &AppConfig) -> Self {
        Self {
            http_client: ProviderHttpClient::new(kind.category(), PROVIDER_NAME, config.request_timeout),
            base_url: config.tmdb_url.clone(),
            access_token: config.tmdb_access_token.clone(),
            mapper: TmdbMapper::new(kind, config.tmdb_image_base_url.clone()),
        }
    }

    pub fn movies(config: &AppConfig) -> Self {
        Self::new(TmdbKind::Movie, config)
    }

    pub fn tv(config: &AppConfig) -> Self {
        Self::new(TmdbKind::Tv, config)
    }

    pub fn kind(&self) -> TmdbKind {
        self.mapper.kind()
    }

    fn token(&self) -> ProviderResult<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| ProviderError::MissingCredentials {
                category: self.kind().category(),
                message: "TMDB_ACCESS_TOKEN is not set".to_string(),
            })
    }

    fn numeric_id(&self, id: &MediaId) -> ProviderResult<u64> {
        id.as_numeric().ok_or_else(|| ProviderError::InvalidId {
            category: self.kind().category(),
            id: id.clone(),
        })
    }

    async fn get<T>(&self, endpoint: &str, params: &[(&str, String)]) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let token = self.token()?;
        let url = build_url(&self.base_url, endpoint, params);
        self.http_client.get(&url, Some(token)).await
    }

    async fn get_page(&self, endpoint: &str, params: &[(&str, String)]) -> ProviderResult<SearchPage> {
        let response: TmdbPage = self.get(endpoint, params).await?;
        Ok(self.mapper.map_page(&response))
    }

    fn not_found(&self, id: &MediaId) -> ProviderError {
        ProviderError::NotFound {
            category: self.kind().category(),
            id: id.clone(),
        }
    }
}

#[async_trait]
impl MediaProviderClient for TmdbAdapter {
    fn category(&self) -> MediaCategory {
        self.kind().category()
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(&self, query: &str, page: u32) -> ProviderResult<SearchPage> {
        let params = [
            ("query", query.to_string()),
            ("include_adult", "false".to_string()),
            ("language", LANGUAGE.to_string()),
            ("page", page.max(1).to_string()),
        ];

        log::info!("TMDB: Searching {} for '{}' (page: {})", self.kind().path(), query, page);

        let results = self
            .get_page(&format!("/search/{}", self.kind().path()), &params)
            .await?;

        log::info!("TMDB: Found {} results for '{}'", results.results.len(), query);
        Ok(results)
    }

    async fn fetch_by_id(&self, id: &MediaId) -> ProviderResult<MediaDetail> {
        let tmdb_id = self.numeric_id(id)?;
        let endpoint = format!("/{}/{}", self.kind().path(), tmdb_id);
        let params = [("language", LANGUAGE.to_string())];

        log::info!("TMDB: Getting {} by ID '{}'", self.kind().path(), tmdb_id);

        let details = match self.kind() {
            TmdbKind::Movie => self.get(&endpoint, &params).await.map(TmdbDetails::Movie),
            TmdbKind::Tv => self.get(&endpoint, &params).await.map(TmdbDetails::Tv),
        };

        match details {
            Ok(details) => Ok(self.mapper.map_detail(&details)),
            Err(ProviderError::Status { status: 404, .. }) => {
                log::info!("TMDB: No {} found for ID '{}'", self.kind().path(), tmdb_id);
                Err(self.not_found(id))
            }
            Err(e) => Err(e),
        }
    }

    async fn popular(&self, page: u32) -> ProviderResult<SearchPage> {
        let params = [("language", LANGUAGE.to_string()), ("page", page.max(1).to_string())];
        self.get_page(&format!("/{}/popular", self.kind().path()), &params)
            .await
    }

    async fn top_rated(&self, page: u32) -> ProviderResult<SearchPage> {
        let params = [("language", LANGUAGE.to_string()), ("page", page.max(1).to_string())];
        self.get_page(&format!("/{}/top_rated", self.kind().path()), &params)
            .await
    }

    /// `genre` is a TMDB genre id
    async fn by_genre(&self, genre: &str, page: u32) -> ProviderResult<SearchPage> {
        let params = [
            ("with_genres", genre.to_string()),
            ("sort_by", "popularity.desc".to_string()),
            ("include_adult", "false".to_string()),
            ("language", LANGUAGE.to_string()),
            ("page", page.max(1).to_string()),
        ];
        self.get_page(&format!("/discover/{}", self.kind().path()), &params)
            .await
    }

    async fn season(&self, id: &MediaId, season_number: u32) -> ProviderResult<SeasonDetail> {
        if self.kind() != TmdbKind::Tv {
            return Err(ProviderError::Unsupported {
                category: self.category(),
                operation: "season details",
            });
        }

        let tmdb_id = self.numeric_id(id)?;
        let endpoint = format!("/tv/{}/season/{}", tmdb_id, season_number);
        let params = [("language", LANGUAGE.to_string())];

        match self.get::<SeasonDetails>(&endpoint, &params).await {
            Ok(season) => Ok(self.mapper.map_season(&season)),
            Err(ProviderError::Status { status: 404, .. }) => Err(self.not_found(id)),
            Err(e) => Err(e),
        }
    }
}
