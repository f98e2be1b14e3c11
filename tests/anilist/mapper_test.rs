use mediashelf::modules::provider::infrastructure::adapters::anilist::models::*;
use mediashelf::modules::provider::infrastructure::adapters::anilist::AniListMapper;
use mediashelf::modules::provider::infrastructure::adapters::mapper::MediaMapper;
use mediashelf::modules::provider::DetailExtras;
use mediashelf::shared::domain::value_objects::{MediaCategory, MediaId, ReleaseMarker};

use crate::utils::fixtures::{ANILIST_DETAIL, ANILIST_SEARCH};

fn search_page() -> Page {
    let response: AniListResponse<AniListSearchResponse> =
        serde_json::from_str(ANILIST_SEARCH).unwrap();
    response.data.unwrap().page
}

#[test]
fn test_map_search_page() {
    let page = AniListMapper::new().map_page(&search_page(), 1);

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_results, 3);
    assert!(!page.has_next_page());

    let titles: Vec<&str> = page.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Attack on Titan", "Death Note", "Unannounced Sequel"]);
    assert!(page
        .results
        .iter()
        .all(|r| r.category() == MediaCategory::Anime));
}

#[test]
fn test_scores_are_normalized_to_ten_point_scale() {
    let page = AniListMapper::new().map_page(&search_page(), 1);
    let ratings: Vec<Option<f32>> = page.results.iter().map(|r| r.rating).collect();

    assert_eq!(ratings, vec![Some(8.5), Some(10.0), None]);
    assert!(page
        .results
        .iter()
        .filter_map(|r| r.rating)
        .all(|r| (0.0..=10.0).contains(&r)));
}

#[test]
fn test_cover_and_release_fallbacks() {
    let page = AniListMapper::new().map_page(&search_page(), 1);

    assert!(page.results[0].image_url.as_deref().unwrap().ends_with("bx16498.jpg"));
    assert!(page.results[1].image_url.as_deref().unwrap().ends_with("bx1535.jpg"));
    assert_eq!(page.results[2].image_url, None);

    assert_eq!(page.results[0].year_or_date, ReleaseMarker::Year(2013));
    assert_eq!(page.results[1].year_or_date, ReleaseMarker::Year(2006));
    assert_eq!(page.results[2].year_or_date, ReleaseMarker::Tba);
}

#[test]
fn test_mapping_is_deterministic() {
    let mapper = AniListMapper::new();
    let source = search_page();

    assert_eq!(mapper.map_page(&source, 1), mapper.map_page(&source, 1));
}

#[test]
fn test_missing_page_info_uses_requested_page() {
    let page = Page {
        media: search_page().media,
        page_info: None,
    };
    let mapped = AniListMapper::new().map_page(&page, 4);

    assert_eq!(mapped.page, 4);
    assert_eq!(mapped.total_pages, 4);
    assert_eq!(mapped.total_results, 3);
}

#[test]
fn test_map_detail() {
    let response: AniListResponse<AniListMediaResponse> =
        serde_json::from_str(ANILIST_DETAIL).unwrap();
    let media = response.data.unwrap().media.unwrap();
    let detail = AniListMapper::new().map_detail(&media);

    assert_eq!(detail.summary.id, MediaId::Numeric(16498));
    assert_eq!(detail.summary.title, "Attack on Titan");
    assert_eq!(detail.summary.image_url.as_deref(), Some("https://s4.anilist.co/xl.jpg"));
    assert_eq!(
        detail.overview.as_deref(),
        Some("Several hundred years ago...\n(Source: Kodansha)")
    );
    assert_eq!(detail.genres, vec!["Action", "Drama"]);

    match detail.extras {
        DetailExtras::Anime {
            episodes,
            duration,
            status,
            studios,
        } => {
            assert_eq!(episodes, Some(25));
            assert_eq!(duration, Some(24));
            assert_eq!(status.as_deref(), Some("Finished"));
            assert_eq!(studios, vec!["Wit Studio"]);
        }
        other => panic!("unexpected extras: {:?}", other),
    }
}

#[test]
fn test_season_year_does_not_stand_in_for_start_date() {
    let json = r#"{
        "id": 21,
        "title": { "english": "Upcoming" },
        "startDate": { "year": null },
        "seasonYear": 2020,
        "averageScore": 70
    }"#;
    let media: Media = serde_json::from_str(json).unwrap();
    let summary = AniListMapper::new().map_summary(&media);

    assert_eq!(summary.year_or_date, ReleaseMarker::Tba);
    assert_eq!(summary.year_or_date.to_string(), "TBA");
}

#[test]
fn test_unscored_anime_displays_na_not_zero() {
    let page = AniListMapper::new().map_page(&search_page(), 1);
    let unscored = &page.results[2];

    assert_eq!(unscored.rating, None);
    assert_eq!(unscored.display_rating(), "N/A");
}
