use mediashelf::modules::provider::infrastructure::adapters::tmdb::models::*;
use mediashelf::shared::domain::value_objects::MediaCategory;

use crate::utils::fixtures::{TMDB_MOVIE_DETAIL, TMDB_MOVIE_SEARCH, TMDB_SEASON, TMDB_TV_SEARCH};

#[test]
fn test_movie_page_deserialization() {
    let page: TmdbPage = serde_json::from_str(TMDB_MOVIE_SEARCH).unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_results, 52);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].title.as_deref(), Some("Inception"));
    assert_eq!(page.results[0].genre_ids, Some(vec![28, 878, 12]));
    assert!(page.results[1].poster_path.is_none());
}

#[test]
fn test_tv_page_uses_name_fields() {
    let page: TmdbPage = serde_json::from_str(TMDB_TV_SEARCH).unwrap();
    let show = &page.results[0];

    assert_eq!(show.name.as_deref(), Some("Breaking Bad"));
    assert!(show.title.is_none());
    assert_eq!(show.first_air_date.as_deref(), Some("2008-01-20"));
}

#[test]
fn test_empty_page_defaults() {
    let page: TmdbPage = serde_json::from_str("{}").unwrap();
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
    assert_eq!(page.total_results, 0);
}

#[test]
fn test_movie_details_deserialization() {
    let movie: MovieDetails = serde_json::from_str(TMDB_MOVIE_DETAIL).unwrap();

    assert_eq!(movie.id, 27205);
    assert_eq!(movie.runtime, Some(148));
    assert_eq!(movie.genres.unwrap().len(), 2);
}

#[test]
fn test_season_deserialization() {
    let season: SeasonDetails = serde_json::from_str(TMDB_SEASON).unwrap();

    assert_eq!(season.season_number, 1);
    assert_eq!(season.episodes.len(), 2);
    assert_eq!(season.episodes[0].name.as_deref(), Some("Pilot"));
}

#[test]
fn test_kind_routing() {
    assert_eq!(TmdbKind::Movie.path(), "movie");
    assert_eq!(TmdbKind::Tv.path(), "tv");
    assert_eq!(TmdbKind::Tv.category(), MediaCategory::Tv);
}
