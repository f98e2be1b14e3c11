use regex::Regex;
use std::sync::OnceLock;

use crate::modules::provider::domain::entities::{MediaDetail, MediaSummary};

/// Main mapper trait for converting provider-specific records to normalized media.
///
/// Mapping is a pure function of its input: the same payload always yields
/// the same record.
pub trait MediaMapper {
    /// Provider list item
    type Item;
    /// Provider detail payload
    type Detail;

    /// Map a provider list item to a summary
    fn map_summary(&self, source: &Self::Item) -> MediaSummary;

    /// Map a provider detail payload to a full record
    fn map_detail(&self, source: &Self::Detail) -> MediaDetail;

    /// Map a list of provider items, preserving provider order
    fn map_summary_list(&self, sources: &[Self::Item]) -> Vec<MediaSummary> {
        sources
            .iter()
            .map(|source| self.map_summary(source))
            .collect()
    }
}

/// Drop HTML tags. Line breaks and block tags become newlines, inline tags
/// (`<i>`, `<b>`, `<a>`, ...) vanish without splitting the sentence.
pub fn strip_html(text: &str) -> String {
    static BLOCKS: OnceLock<Regex> = OnceLock::new();
    static TAGS: OnceLock<Regex> = OnceLock::new();
    let blocks = BLOCKS.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</?(?:p|div|li|ul|ol|h[1-6]|blockquote)\b[^>]*>")
            .expect("valid regex")
    });
    let tags = TAGS.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid regex"));

    let broken = blocks.replace_all(text, "\n");
    let plain = tags.replace_all(&broken, "");
    plain
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Non-blank string, trimmed
pub fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
