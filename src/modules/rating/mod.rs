pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{RatingService, UserRatingStats};
pub use domain::{
    CategoryRatingStats, CurrentUserProvider, Rating, RatingDraft, RatingRepository, RatingStatus,
    RatingValue, User,
};
pub use infrastructure::{InMemoryRatingRepository, StaticUserProvider};
