use crate::modules::provider::domain::{MediaDetail, SearchPage, SeasonDetail};
use crate::shared::domain::value_objects::{MediaCategory, MediaId};
use crate::shared::errors::{ProviderError, ProviderResult};
use async_trait::async_trait;

/// Contract every provider adapter fulfils.
///
/// Adapters are stateless: each call is one request/response round trip that
/// either yields normalized records or a [`ProviderError`] tagged with the
/// adapter's category. No retries happen at this level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaProviderClient: Send + Sync {
    /// Category of every record this client produces
    fn category(&self) -> MediaCategory;

    /// Human readable provider name used in logs
    fn provider_name(&self) -> &'static str;

    /// Search by free text. `page` is 1-based.
    async fn search(&self, query: &str, page: u32) -> ProviderResult<SearchPage>;

    /// Full detail for a single item
    async fn fetch_by_id(&self, id: &MediaId) -> ProviderResult<MediaDetail>;

    /// Popular titles (optional - not all providers may support this)
    async fn popular(&self, _page: u32) -> ProviderResult<SearchPage> {
        Err(ProviderError::Unsupported {
            category: self.category(),
            operation: "popular listings",
        })
    }

    /// Highest rated titles (optional - not all providers may support this)
    async fn top_rated(&self, _page: u32) -> ProviderResult<SearchPage> {
        Err(ProviderError::Unsupported {
            category: self.category(),
            operation: "top rated listings",
        })
    }

    /// Recently published titles (optional - not all providers may support this)
    async fn new_releases(&self, _page: u32) -> ProviderResult<SearchPage> {
        Err(ProviderError::Unsupported {
            category: self.category(),
            operation: "new releases",
        })
    }

    /// Titles in a genre/subject (optional - not all providers may support this)
    async fn by_genre(&self, _genre: &str, _page: u32) -> ProviderResult<SearchPage> {
        Err(ProviderError::Unsupported {
            category: self.category(),
            operation: "genre discovery",
        })
    }

    /// Episode list of one season (TV only)
    async fn season(&self, _id: &MediaId, _season_number: u32) -> ProviderResult<SeasonDetail> {
        Err(ProviderError::Unsupported {
            category: self.category(),
            operation: "season details",
        })
    }
}
