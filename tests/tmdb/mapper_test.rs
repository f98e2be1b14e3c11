use mediashelf::modules::provider::infrastructure::adapters::mapper::MediaMapper;
use mediashelf::modules::provider::infrastructure::adapters::tmdb::models::*;
use mediashelf::modules::provider::infrastructure::adapters::tmdb::TmdbMapper;
use mediashelf::modules::provider::DetailExtras;
use mediashelf::shared::config::DEFAULT_TMDB_IMAGE_BASE_URL;
use mediashelf::shared::domain::value_objects::{MediaCategory, MediaId, ReleaseMarker};

use crate::utils::fixtures::{TMDB_MOVIE_DETAIL, TMDB_MOVIE_SEARCH, TMDB_SEASON, TMDB_TV_SEARCH};

fn movies() -> TmdbMapper {
    TmdbMapper::new(TmdbKind::Movie, DEFAULT_TMDB_IMAGE_BASE_URL)
}

#[test]
fn test_map_movie_page() {
    let source: TmdbPage = serde_json::from_str(TMDB_MOVIE_SEARCH).unwrap();
    let page = movies().map_page(&source);

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next_page());

    let inception = &page.results[0];
    assert_eq!(inception.id, MediaId::Numeric(27205));
    assert_eq!(inception.category(), MediaCategory::Movie);
    assert_eq!(
        inception.image_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
    );
    assert_eq!(inception.year_or_date, ReleaseMarker::Year(2010));
    assert_eq!(inception.rating, Some(8.4));
}

#[test]
fn test_blank_release_date_and_missing_poster() {
    let source: TmdbPage = serde_json::from_str(TMDB_MOVIE_SEARCH).unwrap();
    let page = movies().map_page(&source);

    let short = &page.results[1];
    assert_eq!(short.title, "Inception: The Cobol Job");
    assert_eq!(short.year_or_date, ReleaseMarker::Tba);
    assert_eq!(short.image_url, None);
}

#[test]
fn test_map_tv_page() {
    let source: TmdbPage = serde_json::from_str(TMDB_TV_SEARCH).unwrap();
    let page = TmdbMapper::new(TmdbKind::Tv, DEFAULT_TMDB_IMAGE_BASE_URL).map_page(&source);

    let show = &page.results[0];
    assert_eq!(show.title, "Breaking Bad");
    assert_eq!(show.category(), MediaCategory::Tv);
    assert_eq!(show.year_or_date, ReleaseMarker::Year(2008));
}

#[test]
fn test_image_base_with_trailing_slash() {
    let mapper = TmdbMapper::new(TmdbKind::Movie, "https://image.tmdb.org/t/p/w500/");
    let url = mapper.image_url(Some(&"/poster.jpg".to_string()));
    assert_eq!(url.as_deref(), Some("https://image.tmdb.org/t/p/w500/poster.jpg"));
}

#[test]
fn test_mapping_is_deterministic() {
    let source: TmdbPage = serde_json::from_str(TMDB_MOVIE_SEARCH).unwrap();
    assert_eq!(movies().map_page(&source), movies().map_page(&source));
}

#[test]
fn test_map_movie_detail() {
    let movie: MovieDetails = serde_json::from_str(TMDB_MOVIE_DETAIL).unwrap();
    let detail = movies().map_detail(&TmdbDetails::Movie(movie));

    assert_eq!(detail.summary.title, "Inception");
    assert_eq!(detail.genres, vec!["Action", "Science Fiction"]);
    assert!(detail.overview.unwrap().starts_with("Cobb"));

    match detail.extras {
        DetailExtras::Movie {
            runtime, tagline, ..
        } => {
            assert_eq!(runtime, Some(148));
            assert_eq!(tagline.as_deref(), Some("Your mind is the scene of the crime."));
        }
        other => panic!("unexpected extras: {:?}", other),
    }
}

#[test]
fn test_map_season() {
    let season: SeasonDetails = serde_json::from_str(TMDB_SEASON).unwrap();
    let mapped = TmdbMapper::new(TmdbKind::Tv, DEFAULT_TMDB_IMAGE_BASE_URL).map_season(&season);

    assert_eq!(mapped.season_number, 1);
    assert_eq!(mapped.name.as_deref(), Some("Season 1"));
    assert_eq!(mapped.episodes.len(), 2);
    assert_eq!(mapped.episodes[0].name, "Pilot");
    assert_eq!(mapped.episodes[0].runtime, Some(58));
    assert_eq!(mapped.episodes[1].rating, Some(8.0));
}
