pub mod anilist;
pub mod google_books;
pub mod mapper;
pub mod registry;
pub mod tmdb;

pub use anilist::AniListAdapter;
pub use google_books::GoogleBooksAdapter;
pub use registry::ProviderRegistry;
pub use tmdb::{TmdbAdapter, TmdbKind};
