pub mod provider_http_client;

pub use provider_http_client::{build_url, parse_body, ProviderHttpClient};
