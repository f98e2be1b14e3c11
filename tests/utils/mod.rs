#![allow(dead_code)]

pub mod fixtures;
pub mod stub_provider;

pub use stub_provider::StubProvider;

use mediashelf::modules::provider::infrastructure::ProviderRegistry;
use mediashelf::modules::provider::MediaProviderClient;
use mediashelf::modules::search::SearchAggregator;
use std::sync::Arc;

/// Aggregator over the given clients, default cap
pub fn aggregator_with(clients: Vec<Arc<dyn MediaProviderClient>>) -> SearchAggregator {
    let mut registry = ProviderRegistry::new();
    for client in clients {
        registry.register(client);
    }
    SearchAggregator::new(Arc::new(registry))
}
