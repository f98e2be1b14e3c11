pub mod modules;
pub mod shared;

use anyhow::Context;
use modules::{
    provider::{application::ProviderService, infrastructure::ProviderRegistry},
    rating::{
        application::RatingService,
        domain::{CurrentUserProvider, RatingRepository},
        infrastructure::{InMemoryRatingRepository, StaticUserProvider},
    },
    search::application::{SearchAggregator, SearchCoordinator},
};
use shared::{utils::init_logger, AppConfig};
use std::sync::Arc;

/// Wired application services
pub struct Services {
    pub config: AppConfig,
    pub registry: Arc<ProviderRegistry>,
    pub providers: ProviderService,
    pub aggregator: Arc<SearchAggregator>,
    pub coordinator: Arc<SearchCoordinator>,
    pub ratings: Arc<RatingService>,
}

impl Services {
    /// Load `.env`, read the environment and wire everything
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env().context("Failed to load configuration")?;
        build_services(config)
    }
}

/// Wire services from config with in-process rating collaborators
pub fn build_services(config: AppConfig) -> anyhow::Result<Services> {
    let ratings: Arc<dyn RatingRepository> = Arc::new(InMemoryRatingRepository::new());
    let users: Arc<dyn CurrentUserProvider> = Arc::new(StaticUserProvider::signed_out());
    build_services_with(config, ratings, users)
}

/// Wire services from config around external rating collaborators
pub fn build_services_with(
    config: AppConfig,
    ratings: Arc<dyn RatingRepository>,
    users: Arc<dyn CurrentUserProvider>,
) -> anyhow::Result<Services> {
    init_logger();

    if config.result_cap == 0 {
        anyhow::bail!("MEDIA_RESULT_CAP must be greater than zero");
    }

    let registry = Arc::new(ProviderRegistry::from_config(&config));
    log::info!("Provider registry initialized: {:?}", registry);

    let providers = ProviderService::new(Arc::clone(&registry));
    let aggregator = Arc::new(
        SearchAggregator::new(Arc::clone(&registry)).with_result_cap(config.result_cap),
    );
    let coordinator = Arc::new(SearchCoordinator::new(Arc::clone(&aggregator)));
    let ratings = Arc::new(RatingService::new(ratings, users));

    Ok(Services {
        config,
        registry,
        providers,
        aggregator,
        coordinator,
        ratings,
    })
}
