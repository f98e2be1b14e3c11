pub mod category_router;
pub mod search_session;

pub use category_router::{counts, select, CategoryCounts};
pub use search_session::{CategoryResults, SearchSession};
