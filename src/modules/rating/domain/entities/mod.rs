pub mod rating;
pub mod user;

pub use rating::{
    round_one_decimal, CategoryRatingStats, Rating, RatingDraft, RatingStatus, RatingValue,
    MAX_USER_RATING,
};
pub use user::User;
