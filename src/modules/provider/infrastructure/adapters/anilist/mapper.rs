use super::models::*;
use crate::modules::provider::domain::entities::{
    title_or_placeholder, DetailExtras, MediaDetail, MediaSummary, SearchPage,
};
use crate::modules::provider::infrastructure::adapters::mapper::{non_blank, strip_html, MediaMapper};
use crate::shared::domain::value_objects::{MediaCategory, MediaId, ReleaseMarker};

/// AniList specific mapper implementation
#[derive(Debug, Clone, Default)]
pub struct AniListMapper;

impl AniListMapper {
    pub fn new() -> Self {
        Self
    }

    /// English title, else romaji, else native. Positional precedence only.
    pub fn preferred_title(title: Option<&MediaTitle>) -> String {
        let candidate = title.and_then(|t| {
            non_blank(t.english.as_ref())
                .or_else(|| non_blank(t.romaji.as_ref()))
                .or_else(|| non_blank(t.native.as_ref()))
        });
        title_or_placeholder(candidate)
    }

    /// AniList scores are 0-100
    pub fn normalize_score(average_score: Option<i32>) -> Option<f32> {
        average_score.map(|score| score as f32 / 10.0)
    }

    /// Start-date year, else TBA
    fn map_release(media: &Media) -> ReleaseMarker {
        ReleaseMarker::from_year(media.start_date.as_ref().and_then(|date| date.year))
    }

    fn map_cover(cover: Option<&MediaCoverImage>) -> Option<String> {
        cover.and_then(|c| non_blank(c.large.as_ref()).or_else(|| non_blank(c.medium.as_ref())))
    }

    fn map_id(media: &Media) -> MediaId {
        MediaId::Numeric(media.id.unwrap_or_default().max(0) as u64)
    }

    /// Map a GraphQL page into a normalized search page
    pub fn map_page(&self, page: &Page, requested_page: u32) -> SearchPage {
        let results = self.map_summary_list(&page.media);
        let info = page.page_info.clone().unwrap_or_default();
        let current_page = info
            .current_page
            .map(|p| p.max(1) as u32)
            .unwrap_or(requested_page);
        let total_pages = info
            .last_page
            .map(|p| p.max(0) as u32)
            .unwrap_or(current_page);
        let total_results = info
            .total
            .map(|t| t.max(0) as u64)
            .unwrap_or(results.len() as u64);

        SearchPage::new(results, current_page, total_pages, total_results)
    }
}

impl MediaMapper for AniListMapper {
    type Item = Media;
    type Detail = Media;

    fn map_summary(&self, media: &Media) -> MediaSummary {
        MediaSummary::new(
            Self::map_id(media),
            MediaCategory::Anime,
            Self::preferred_title(media.title.as_ref()),
        )
        .with_image_url(Self::map_cover(media.cover_image.as_ref()))
        .with_rating(Self::normalize_score(media.average_score))
        .with_release(Self::map_release(media))
    }

    fn map_detail(&self, media: &Media) -> MediaDetail {
        let studios = media
            .studios
            .as_ref()
            .and_then(|s| s.nodes.as_ref())
            .map(|nodes| nodes.iter().filter_map(|n| non_blank(n.name.as_ref())).collect())
            .unwrap_or_default();

        let extras = DetailExtras::Anime {
            episodes: media.episodes.and_then(|e| u32::try_from(e).ok()),
            duration: media.duration.and_then(|d| u32::try_from(d).ok()),
            status: media.status.as_ref().map(|s| s.label().to_string()),
            studios,
        };

        let summary = self.map_summary(media).with_image_url(
            media
                .cover_image
                .as_ref()
                .and_then(|c| non_blank(c.extra_large.as_ref()))
                .or_else(|| Self::map_cover(media.cover_image.as_ref())),
        );

        MediaDetail::new(summary, extras)
            .with_overview(media.description.as_deref().map(strip_html))
            .with_genres(media.genres.clone().unwrap_or_default())
    }
}
