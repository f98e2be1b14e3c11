mod app_error;
mod provider_error;

pub use app_error::{AppError, AppResult};
pub use provider_error::{DetailFetchError, ProviderError};

/// Result of a single provider round trip
pub type ProviderResult<T> = Result<T, ProviderError>;
