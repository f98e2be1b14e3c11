pub mod provider;
pub mod rating;
pub mod search;
