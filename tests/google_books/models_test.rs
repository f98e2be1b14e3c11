use mediashelf::modules::provider::infrastructure::adapters::google_books::models::*;

use crate::utils::fixtures::{GOOGLE_BOOKS_EMPTY, GOOGLE_BOOKS_SEARCH, GOOGLE_BOOKS_VOLUME};

#[test]
fn test_volumes_deserialization() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_SEARCH).unwrap();

    assert_eq!(response.total_items, 41);
    assert_eq!(response.items.len(), 2);

    let info = &response.items[0].volume_info;
    assert_eq!(info.title.as_deref(), Some("The Google Story"));
    assert_eq!(info.authors.as_ref().map(Vec::len), Some(2));
    assert_eq!(info.average_rating, Some(3.5));
    assert!(info.image_links.as_ref().unwrap().thumbnail.is_some());
}

#[test]
fn test_missing_items_is_empty() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_EMPTY).unwrap();
    assert_eq!(response.total_items, 0);
    assert!(response.items.is_empty());
}

#[test]
fn test_sparse_volume() {
    let response: VolumesResponse = serde_json::from_str(GOOGLE_BOOKS_SEARCH).unwrap();
    let info = &response.items[1].volume_info;

    assert!(info.authors.is_none());
    assert!(info.published_date.is_none());
    assert!(info.image_links.is_none());
}

#[test]
fn test_single_volume_deserialization() {
    let volume: Volume = serde_json::from_str(GOOGLE_BOOKS_VOLUME).unwrap();

    assert_eq!(volume.id, "zyTCAlFPjgYC");
    assert_eq!(volume.volume_info.page_count, Some(207));
    assert_eq!(
        volume.volume_info.image_links.unwrap().large.as_deref(),
        Some("http://books.google.com/large")
    );
}
