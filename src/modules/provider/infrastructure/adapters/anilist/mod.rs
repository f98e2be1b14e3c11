pub mod adapter;
pub mod mapper;
pub mod models;
pub mod queries;

pub use adapter::AniListAdapter;
pub use mapper::AniListMapper;
