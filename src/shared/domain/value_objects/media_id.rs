use serde::{Deserialize, Serialize};
use std::fmt;

use super::MediaCategory;

/// Provider-native identifier.
///
/// AniList and TMDB use integers, Google Books uses opaque strings. Only unique
/// within one category, see [`MediaKey`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum MediaId {
    Numeric(u64),
    Text(String),
}

impl MediaId {
    /// Numeric form, parsing text ids that happen to be digits
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            MediaId::Numeric(id) => Some(*id),
            MediaId::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaId::Numeric(id) => write!(f, "{}", id),
            MediaId::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<u64> for MediaId {
    fn from(id: u64) -> Self {
        MediaId::Numeric(id)
    }
}

impl From<u32> for MediaId {
    fn from(id: u32) -> Self {
        MediaId::Numeric(id as u64)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        MediaId::Text(id.to_string())
    }
}

impl From<String> for MediaId {
    fn from(id: String) -> Self {
        MediaId::Text(id)
    }
}

/// Globally unique key for a media item: ids collide across categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MediaKey {
    pub category: MediaCategory,
    pub id: MediaId,
}

impl MediaKey {
    pub fn new(category: MediaCategory, id: impl Into<MediaId>) -> Self {
        Self {
            category,
            id: id.into(),
        }
    }
}

impl fmt::Display for MediaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.id)
    }
}
