use mediashelf::modules::provider::infrastructure::adapters::google_books::mapper::UNKNOWN_AUTHOR;
use mediashelf::modules::provider::infrastructure::adapters::google_books::models::*;
use mediashelf::modules::provider::infrastructure::adapters::google_books::GoogleBooksMapper;
use mediashelf::modules::provider::infrastructure::adapters::mapper::MediaMapper;
use mediashelf::modules::provider::DetailExtras;
use mediashelf::shared::domain::value_objects::{MediaCategory, MediaId, ReleaseMarker};

use crate::utils::fixtures::{GOOGLE_BOOKS_EMPTY, GOOGLE_BOOKS_SEARCH, GOOGLE_BOOKS_VOLUME};

#[test]
fn test_map_volumes_page() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_SEARCH).unwrap();
    let page = GoogleBooksMapper::new().map_page(&response, 1, 20);

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_results, 41);

    let book = &page.results[0];
    assert_eq!(book.id, MediaId::Text("zyTCAlFPjgYC".to_string()));
    assert_eq!(book.category(), MediaCategory::Book);
    assert_eq!(book.subtitle.as_deref(), Some("David A. Vise, Mark Malseed"));
    assert_eq!(book.year_or_date, ReleaseMarker::Year(2005));
    assert!(book.image_url.as_deref().unwrap().ends_with("zoom=1"));
}

#[test]
fn test_book_rating_stays_on_five_point_scale() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_SEARCH).unwrap();
    let page = GoogleBooksMapper::new().map_page(&response, 1, 20);

    assert_eq!(page.results[0].rating, Some(3.5));
    assert_eq!(page.results[0].rating_suffix(), "/5");
    assert!(page
        .results
        .iter()
        .filter_map(|r| r.rating)
        .all(|r| (0.0..=5.0).contains(&r)));
}

#[test]
fn test_sparse_volume_fallbacks() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_SEARCH).unwrap();
    let page = GoogleBooksMapper::new().map_page(&response, 1, 20);

    let pamphlet = &page.results[1];
    assert_eq!(pamphlet.subtitle.as_deref(), Some(UNKNOWN_AUTHOR));
    assert_eq!(pamphlet.year_or_date, ReleaseMarker::Tba);
    assert_eq!(pamphlet.rating, None);
    assert_eq!(pamphlet.image_url, None);
}

#[test]
fn test_empty_response_maps_to_empty_page() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_EMPTY).unwrap();
    let page = GoogleBooksMapper::new().map_page(&response, 2, 20);

    assert!(page.results.is_empty());
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn test_mapping_is_deterministic() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_SEARCH).unwrap();
    let mapper = GoogleBooksMapper::new();
    assert_eq!(mapper.map_page(&response, 1, 20), mapper.map_page(&response, 1, 20));
}

#[test]
fn test_map_volume_detail() {
    let volume: Volume = serde_json::from_str(GOOGLE_BOOKS_VOLUME).unwrap();
    let detail = GoogleBooksMapper::new().map_detail(&volume);

    assert_eq!(detail.summary.image_url.as_deref(), Some("http://books.google.com/large"));
    assert_eq!(
        detail.overview.as_deref(),
        Some("Here is the story behind one of the most remarkable Internet successes.")
    );
    assert_eq!(detail.genres, vec!["Browsers (Computer programs)"]);

    match detail.extras {
        DetailExtras::Book {
            authors,
            page_count,
            publisher,
            language,
            ..
        } => {
            assert_eq!(authors.len(), 2);
            assert_eq!(page_count, Some(207));
            assert_eq!(publisher.as_deref(), Some("Random House Digital, Inc."));
            assert_eq!(language.as_deref(), Some("en"));
        }
        other => panic!("unexpected extras: {:?}", other),
    }
}

#[test]
fn test_inline_markup_does_not_split_overview() {
    let json = r#"{
        "id": "inline01",
        "volumeInfo": {
            "title": "Dune",
            "description": "The sequel to <i>Dune</i>, by <b>Frank Herbert</b>.<br>Book two."
        }
    }"#;
    let volume: Volume = serde_json::from_str(json).unwrap();
    let detail = GoogleBooksMapper::new().map_detail(&volume);

    assert_eq!(
        detail.overview.as_deref(),
        Some("The sequel to Dune, by Frank Herbert.\nBook two.")
    );
}
