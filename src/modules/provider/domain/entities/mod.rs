pub mod media_detail;
pub mod media_summary;
pub mod search_page;

pub use media_detail::{DetailExtras, MediaDetail};
pub use media_summary::{title_or_placeholder, MediaSummary, UNTITLED};
pub use search_page::{EpisodeSummary, SearchPage, SeasonDetail};
