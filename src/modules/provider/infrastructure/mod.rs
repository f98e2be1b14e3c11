pub mod adapters;
pub mod http_client;

// Re-export commonly used types
pub use adapters::{AniListAdapter, GoogleBooksAdapter, ProviderRegistry, TmdbAdapter, TmdbKind};
pub use http_client::ProviderHttpClient;
