use std::collections::HashMap;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_ANILIST_URL: &str = "https://graphql.anilist.co";
pub const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RESULT_CAP: usize = 8;

const GOOGLE_BOOKS_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_BOOKS_API_KEY";

/// Runtime configuration for the provider adapters and the aggregator
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub anilist_url: String,
    pub tmdb_url: String,
    pub tmdb_image_base_url: String,
    /// TMDB v4 read access token, sent as a bearer token
    pub tmdb_access_token: Option<String>,
    pub google_books_url: String,
    pub google_books_api_key: Option<String>,
    /// Single bounded wait per HTTP/GraphQL call
    pub request_timeout: Duration,
    /// Per-category display cap applied by the aggregator
    pub result_cap: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            anilist_url: DEFAULT_ANILIST_URL.to_string(),
            tmdb_url: DEFAULT_TMDB_URL.to_string(),
            tmdb_image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            tmdb_access_token: None,
            google_books_url: DEFAULT_GOOGLE_BOOKS_URL.to_string(),
            google_books_api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            result_cap: DEFAULT_RESULT_CAP,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from explicit key/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let lookup = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = AppConfig::default();

        if let Some(url) = lookup("ANILIST_API_URL") {
            config.anilist_url = url;
        }
        if let Some(url) = lookup("TMDB_API_URL") {
            config.tmdb_url = url;
        }
        if let Some(url) = lookup("TMDB_IMAGE_BASE_URL") {
            config.tmdb_image_base_url = url;
        }
        if let Some(url) = lookup("GOOGLE_BOOKS_API_URL") {
            config.google_books_url = url;
        }

        config.tmdb_access_token = lookup("TMDB_ACCESS_TOKEN");
        config.google_books_api_key = lookup("GOOGLE_BOOKS_API_KEY");

        if let Some(raw) = lookup("MEDIA_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                AppError::ValidationError(format!("MEDIA_REQUEST_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            if secs == 0 {
                return Err(AppError::ValidationError(
                    "MEDIA_REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("MEDIA_RESULT_CAP") {
            config.result_cap = raw.parse().map_err(|_| {
                AppError::ValidationError(format!("MEDIA_RESULT_CAP is not a number: {}", raw))
            })?;
        }

        Ok(config)
    }

    /// Google Books key, only when it looks like a real key
    pub fn valid_google_books_key(&self) -> Option<&str> {
        self.google_books_api_key
            .as_deref()
            .filter(|key| *key != GOOGLE_BOOKS_KEY_PLACEHOLDER && key.len() > 10)
    }

    pub fn with_tmdb_access_token(mut self, token: impl Into<String>) -> Self {
        self.tmdb_access_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
