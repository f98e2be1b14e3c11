// Shared kernel: value objects, errors, configuration and logging used by
// every module.

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod domain; // Shared domain concepts (value objects)
pub mod errors; // Shared error types
pub mod utils; // Logging helpers

pub use config::AppConfig;
pub use errors::{AppError, AppResult, DetailFetchError, ProviderError, ProviderResult};
