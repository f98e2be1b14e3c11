pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::ProviderService;
pub use domain::{DetailExtras, MediaDetail, MediaSummary, SearchPage, SeasonDetail};
pub use infrastructure::ProviderRegistry;
pub use traits::MediaProviderClient;
