pub mod aggregator;
pub mod coordinator;

pub use aggregator::SearchAggregator;
pub use coordinator::{SearchCoordinator, SearchOutcome};
