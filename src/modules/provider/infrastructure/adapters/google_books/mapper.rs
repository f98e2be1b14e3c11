use super::models::*;
use crate::modules::provider::domain::entities::{
    title_or_placeholder, DetailExtras, MediaDetail, MediaSummary, SearchPage,
};
use crate::modules::provider::infrastructure::adapters::mapper::{non_blank, strip_html, MediaMapper};
use crate::shared::domain::value_objects::{MediaCategory, MediaId, ReleaseMarker};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Google Books specific mapper implementation
#[derive(Debug, Clone, Default)]
pub struct GoogleBooksMapper;

impl GoogleBooksMapper {
    pub fn new() -> Self {
        Self
    }

    /// Authors joined with ", ", or [`UNKNOWN_AUTHOR`]
    pub fn author_line(authors: Option<&Vec<String>>) -> String {
        let names: Vec<&str> = authors
            .map(|authors| {
                authors
                    .iter()
                    .map(|a| a.trim())
                    .filter(|a| !a.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if names.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            names.join(", ")
        }
    }

    /// `page` is the 1-based page that was requested
    pub fn map_page(&self, response: &VolumesResponse, page: u32, max_results: u32) -> SearchPage {
        let per_page = u64::from(max_results.max(1));
        let total_pages = response.total_items.div_ceil(per_page);

        SearchPage::new(
            self.map_summary_list(&response.items),
            page.max(1),
            u32::try_from(total_pages).unwrap_or(u32::MAX),
            response.total_items,
        )
    }

    fn base_summary(volume: &Volume, image_url: Option<String>) -> MediaSummary {
        let info = &volume.volume_info;
        MediaSummary::new(
            MediaId::Text(volume.id.clone()),
            MediaCategory::Book,
            title_or_placeholder(info.title.clone()),
        )
        .with_image_url(image_url)
        // Native 0-5 scale, not rescaled
        .with_rating(info.average_rating)
        .with_release(ReleaseMarker::year_from_date(info.published_date.as_deref()))
        .with_subtitle(Some(Self::author_line(info.authors.as_ref())))
    }
}

impl MediaMapper for GoogleBooksMapper {
    type Item = Volume;
    type Detail = Volume;

    fn map_summary(&self, volume: &Volume) -> MediaSummary {
        let thumbnail = volume
            .volume_info
            .image_links
            .as_ref()
            .and_then(|links| non_blank(links.thumbnail.as_ref()));
        Self::base_summary(volume, thumbnail)
    }

    fn map_detail(&self, volume: &Volume) -> MediaDetail {
        let info = &volume.volume_info;
        let cover = info.image_links.as_ref().and_then(|links| {
            non_blank(links.large.as_ref()).or_else(|| non_blank(links.thumbnail.as_ref()))
        });

        let extras = DetailExtras::Book {
            authors: info.authors.clone().unwrap_or_default(),
            page_count: info.page_count.filter(|count| *count > 0),
            publisher: non_blank(info.publisher.as_ref()),
            published_date: non_blank(info.published_date.as_ref()),
            language: non_blank(info.language.as_ref()),
        };

        MediaDetail::new(Self::base_summary(volume, cover), extras)
            .with_overview(info.description.as_deref().map(strip_html))
            .with_genres(info.categories.clone().unwrap_or_default())
    }
}
