use super::models::*;
use crate::modules::provider::domain::entities::{
    title_or_placeholder, DetailExtras, EpisodeSummary, MediaDetail, MediaSummary, SearchPage,
    SeasonDetail,
};
use crate::modules::provider::infrastructure::adapters::mapper::{non_blank, MediaMapper};
use crate::shared::domain::value_objects::{MediaId, ReleaseMarker};

/// TMDB (The Movie Database) specific mapper implementation
#[derive(Debug, Clone)]
pub struct TmdbMapper {
    kind: TmdbKind,
    image_base_url: String,
}

impl TmdbMapper {
    pub fn new(kind: TmdbKind, image_base_url: impl Into<String>) -> Self {
        Self {
            kind,
            image_base_url: image_base_url.into(),
        }
    }

    pub fn kind(&self) -> TmdbKind {
        self.kind
    }

    /// Prefix a relative TMDB path with the image base URL
    pub fn image_url(&self, path: Option<&String>) -> Option<String> {
        non_blank(path).map(|path| {
            let base = self.image_base_url.trim_end_matches('/');
            if path.starts_with('/') {
                format!("{}{}", base, path)
            } else {
                format!("{}/{}", base, path)
            }
        })
    }

    fn genre_names(genres: Option<&Vec<Genre>>) -> Vec<String> {
        genres
            .map(|genres| genres.iter().map(|g| g.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Map a TMDB list envelope into a normalized search page
    pub fn map_page(&self, page: &TmdbPage) -> SearchPage {
        SearchPage::new(
            self.map_summary_list(&page.results),
            page.page.max(1),
            page.total_pages,
            page.total_results,
        )
    }

    pub fn map_season(&self, season: &SeasonDetails) -> SeasonDetail {
        SeasonDetail {
            season_number: season.season_number,
            name: non_blank(season.name.as_ref()),
            overview: non_blank(season.overview.as_ref()),
            air_date: non_blank(season.air_date.as_ref()),
            episodes: season
                .episodes
                .iter()
                .map(|episode| EpisodeSummary {
                    episode_number: episode.episode_number,
                    name: title_or_placeholder(episode.name.clone()),
                    air_date: non_blank(episode.air_date.as_ref()),
                    runtime: episode.runtime,
                    rating: episode
                        .vote_average
                        .filter(|v| v.is_finite())
                        .map(|v| v.clamp(0.0, 10.0)),
                })
                .collect(),
        }
    }

    fn map_movie_detail(&self, movie: &MovieDetails) -> MediaDetail {
        let title = non_blank(movie.title.as_ref()).or_else(|| non_blank(movie.original_title.as_ref()));
        let summary = MediaSummary::new(movie.id, self.kind.category(), title_or_placeholder(title))
            .with_image_url(self.image_url(movie.poster_path.as_ref()))
            .with_rating(movie.vote_average)
            .with_release(ReleaseMarker::year_from_date(movie.release_date.as_deref()));

        let extras = DetailExtras::Movie {
            runtime: movie.runtime.filter(|minutes| *minutes > 0),
            tagline: non_blank(movie.tagline.as_ref()),
            status: non_blank(movie.status.as_ref()),
            release_date: non_blank(movie.release_date.as_ref()),
        };

        MediaDetail::new(summary, extras)
            .with_overview(movie.overview.clone())
            .with_genres(Self::genre_names(movie.genres.as_ref()))
    }

    fn map_tv_detail(&self, show: &TvShowDetails) -> MediaDetail {
        let title = non_blank(show.name.as_ref()).or_else(|| non_blank(show.original_name.as_ref()));
        let summary = MediaSummary::new(show.id, self.kind.category(), title_or_placeholder(title))
            .with_image_url(self.image_url(show.poster_path.as_ref()))
            .with_rating(show.vote_average)
            .with_release(ReleaseMarker::year_from_date(show.first_air_date.as_deref()));

        let extras = DetailExtras::Tv {
            number_of_seasons: show.number_of_seasons,
            number_of_episodes: show.number_of_episodes,
            episode_run_time: show.episode_run_time.clone().unwrap_or_default(),
            status: non_blank(show.status.as_ref()),
            first_air_date: non_blank(show.first_air_date.as_ref()),
        };

        MediaDetail::new(summary, extras)
            .with_overview(show.overview.clone())
            .with_genres(Self::genre_names(show.genres.as_ref()))
    }
}

impl MediaMapper for TmdbMapper {
    type Item = TmdbListItem;
    type Detail = TmdbDetails;

    fn map_summary(&self, item: &TmdbListItem) -> MediaSummary {
        let (title, date) = match self.kind {
            TmdbKind::Movie => (item.title.as_ref(), item.release_date.as_deref()),
            TmdbKind::Tv => (item.name.as_ref(), item.first_air_date.as_deref()),
        };

        MediaSummary::new(
            MediaId::Numeric(item.id),
            self.kind.category(),
            title_or_placeholder(non_blank(title)),
        )
        .with_image_url(self.image_url(item.poster_path.as_ref()))
        .with_rating(item.vote_average)
        .with_release(ReleaseMarker::year_from_date(date))
    }

    fn map_detail(&self, details: &TmdbDetails) -> MediaDetail {
        match details {
            TmdbDetails::Movie(movie) => self.map_movie_detail(movie),
            TmdbDetails::Tv(show) => self.map_tv_detail(show),
        }
    }
}
