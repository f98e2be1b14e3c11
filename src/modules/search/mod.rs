pub mod application;
pub mod domain;

pub use application::{SearchAggregator, SearchCoordinator, SearchOutcome};
pub use domain::{counts, select, CategoryCounts, CategoryResults, SearchSession};
