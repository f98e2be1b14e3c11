pub mod rating_repository;
pub mod user_provider;

pub use rating_repository::RatingRepository;
pub use user_provider::CurrentUserProvider;

#[cfg(test)]
pub use rating_repository::MockRatingRepository;
#[cfg(test)]
pub use user_provider::MockCurrentUserProvider;
