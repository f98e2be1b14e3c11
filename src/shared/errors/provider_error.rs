use thiserror::Error;

use crate::shared::domain::value_objects::{MediaCategory, MediaId};

/// Failure of a single provider round trip.
///
/// Adapters never retry; the aggregator absorbs these into an empty category.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{category} provider request failed: {message}")]
    Transport {
        category: MediaCategory,
        message: String,
    },

    #[error("{category} provider timed out")]
    Timeout { category: MediaCategory },

    #[error("{category} provider returned HTTP {status}")]
    Status { category: MediaCategory, status: u16 },

    #[error("{category} provider returned a malformed payload: {message}")]
    Parse {
        category: MediaCategory,
        message: String,
    },

    #[error("{category} item '{id}' not found")]
    NotFound { category: MediaCategory, id: MediaId },

    #[error("{category} provider is missing credentials: {message}")]
    MissingCredentials {
        category: MediaCategory,
        message: String,
    },

    #[error("Invalid {category} id: {id}")]
    InvalidId { category: MediaCategory, id: MediaId },

    #[error("{category} provider does not support {operation}")]
    Unsupported {
        category: MediaCategory,
        operation: &'static str,
    },
}

impl ProviderError {
    pub fn category(&self) -> MediaCategory {
        match self {
            ProviderError::Transport { category, .. }
            | ProviderError::Timeout { category }
            | ProviderError::Status { category, .. }
            | ProviderError::Parse { category, .. }
            | ProviderError::NotFound { category, .. }
            | ProviderError::MissingCredentials { category, .. }
            | ProviderError::InvalidId { category, .. }
            | ProviderError::Unsupported { category, .. } => *category,
        }
    }

    /// Network, timeout and non-2xx failures
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProviderError::Transport { .. }
                | ProviderError::Timeout { .. }
                | ProviderError::Status { .. }
        )
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ProviderError::Parse { .. })
    }

    /// Whether repeating the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Transport { .. } | ProviderError::Timeout { .. } => true,
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Classify a reqwest failure for the given provider
    pub fn from_reqwest(category: MediaCategory, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout { category }
        } else if let Some(status) = err.status() {
            ProviderError::Status {
                category,
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            ProviderError::Parse {
                category,
                message: err.to_string(),
            }
        } else {
            ProviderError::Transport {
                category,
                message: err.to_string(),
            }
        }
    }
}

/// Loading one item's full detail failed.
///
/// Unlike search failures this surfaces to the user, who can retry.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to load {category} '{id}': {source}")]
pub struct DetailFetchError {
    pub category: MediaCategory,
    pub id: MediaId,
    #[source]
    pub source: ProviderError,
}

impl DetailFetchError {
    pub fn new(category: MediaCategory, id: MediaId, source: ProviderError) -> Self {
        Self {
            category,
            id,
            source,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.source.is_retryable()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, ProviderError::NotFound { .. })
    }
}
