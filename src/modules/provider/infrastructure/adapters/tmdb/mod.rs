pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::TmdbAdapter;
pub use mapper::TmdbMapper;
pub use models::TmdbKind;
