use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-effort release indicator shown under a title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReleaseMarker {
    Year(i32),
    Date(String),
    #[default]
    Tba,
}

impl ReleaseMarker {
    /// Year from the leading four digits of a provider date string
    /// (`"2010-07-15"`, `"2010"`), or `Tba` when absent or unparseable.
    pub fn year_from_date(date: Option<&str>) -> Self {
        date.and_then(leading_year)
            .map(ReleaseMarker::Year)
            .unwrap_or(ReleaseMarker::Tba)
    }

    pub fn from_year(year: Option<i32>) -> Self {
        match year {
            Some(year) if year > 0 => ReleaseMarker::Year(year),
            _ => ReleaseMarker::Tba,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            ReleaseMarker::Year(year) => Some(*year),
            ReleaseMarker::Date(date) => leading_year(date),
            ReleaseMarker::Tba => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ReleaseMarker::Tba)
    }
}

impl fmt::Display for ReleaseMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseMarker::Year(year) => write!(f, "{}", year),
            ReleaseMarker::Date(date) => write!(f, "{}", date),
            ReleaseMarker::Tba => write!(f, "TBA"),
        }
    }
}

fn leading_year(date: &str) -> Option<i32> {
    let digits: String = date.trim().chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}
