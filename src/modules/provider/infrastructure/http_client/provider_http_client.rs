//! Shared HTTP transport for the provider adapters
//!
//! One bounded wait per request, no retries. Every failure comes back as a
//! [`ProviderError`] tagged with the owning adapter's category.

use crate::shared::domain::value_objects::MediaCategory;
use crate::shared::errors::{ProviderError, ProviderResult};
use crate::shared::utils::LogContext;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("mediashelf/", env!("CARGO_PKG_VERSION"));
const BODY_EXCERPT_LEN: usize = 200;

/// Thin reqwest wrapper owned by one adapter
#[derive(Debug, Clone)]
pub struct ProviderHttpClient {
    client: Client,
    category: MediaCategory,
    provider_name: &'static str,
    timeout: Duration,
}

impl ProviderHttpClient {
    pub fn new(category: MediaCategory, provider_name: &'static str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            category,
            provider_name,
            timeout,
        }
    }

    /// Make a GET request, optionally authenticated with a bearer token
    pub async fn get<T>(&self, url: &str, bearer_token: Option<&str>) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(Method::GET, url, bearer_token, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T>(&self, url: &str, body: &Value) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(Method::POST, url, None, Some(body)).await
    }

    async fn request<T>(
        &self,
        method: Method,
        url: &str,
        bearer_token: Option<&str>,
        body: Option<&Value>,
    ) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let endpoint = strip_query(url);
        LogContext::api_call(self.provider_name, endpoint, "", None);
        let started = Instant::now();

        let mut request_builder = self
            .client
            .request(method, url)
            .timeout(self.timeout)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");

        if let Some(token) = bearer_token {
            request_builder = request_builder.bearer_auth(token);
        }

        // Add body for POST requests
        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(self.category, e))?;

        let status = response.status();
        LogContext::api_call(
            self.provider_name,
            endpoint,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if !status.is_success() {
            log::warn!(
                "{} API returned error: {} for {}",
                self.provider_name,
                status,
                endpoint
            );
            return Err(ProviderError::Status {
                category: self.category,
                status: status.as_u16(),
            });
        }

        self.parse_response(response).await
    }

    /// Parse the response body, keeping an excerpt of unexpected payloads
    async fn parse_response<T>(&self, response: Response) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(self.category, e))?;

        parse_body(self.category, self.provider_name, &response_text)
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Decode a JSON body into `T`, mapping failures to `ProviderError::Parse`
pub fn parse_body<T>(category: MediaCategory, provider_name: &str, text: &str) -> ProviderResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(text).map_err(|e| {
        let excerpt: String = text.chars().take(BODY_EXCERPT_LEN).collect();
        let excerpt = if excerpt.len() < text.len() {
            format!("{}...", excerpt)
        } else {
            excerpt
        };
        log::error!(
            "Failed to parse {} response: {}. Response: {}",
            provider_name,
            e,
            excerpt
        );
        ProviderError::Parse {
            category,
            message: format!("{} (response: {})", e, excerpt),
        }
    })
}

/// Build `base + endpoint` with URL-encoded query parameters
pub fn build_url(base_url: &str, endpoint: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base_url.trim_end_matches('/'), endpoint);
    for (index, (key, value)) in params.iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

// Keeps API keys out of the logs
fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
