//! Pure selection over a populated [`SearchSession`]

use serde::{Deserialize, Serialize};

use super::SearchSession;
use crate::modules::provider::domain::entities::MediaSummary;
use crate::shared::domain::value_objects::{CategoryFilter, MediaCategory};

/// Items shown for a tab. `All` concatenates the categories in
/// [`MediaCategory::DISPLAY_ORDER`]; an empty result is a valid state.
pub fn select(session: &SearchSession, filter: CategoryFilter) -> Vec<MediaSummary> {
    match filter {
        CategoryFilter::All => MediaCategory::DISPLAY_ORDER
            .iter()
            .flat_map(|category| session.category(*category).iter().cloned())
            .collect(),
        CategoryFilter::Only(category) => session.category(category).to_vec(),
    }
}

/// Tab badge counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub movie: usize,
    pub tv: usize,
    pub anime: usize,
    pub book: usize,
}

impl CategoryCounts {
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(MediaCategory::Movie) => self.movie,
            CategoryFilter::Only(MediaCategory::Tv) => self.tv,
            CategoryFilter::Only(MediaCategory::Anime) => self.anime,
            CategoryFilter::Only(MediaCategory::Book) => self.book,
        }
    }
}

pub fn counts(session: &SearchSession) -> CategoryCounts {
    let movie = session.category(MediaCategory::Movie).len();
    let tv = session.category(MediaCategory::Tv).len();
    let anime = session.category(MediaCategory::Anime).len();
    let book = session.category(MediaCategory::Book).len();

    CategoryCounts {
        all: movie + tv + anime + book,
        movie,
        tv,
        anime,
        book,
    }
}
