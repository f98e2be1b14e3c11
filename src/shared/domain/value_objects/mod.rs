mod media_category;
mod media_id;
mod release_marker;

pub use media_category::{CategoryFilter, MediaCategory};
pub use media_id::{MediaId, MediaKey};
pub use release_marker::ReleaseMarker;
