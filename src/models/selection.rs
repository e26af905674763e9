//! Filter selection applied to the expense list
//!
//! A selection is a throwaway value built per query: time range, category
//! and free-text search.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;

/// Lookback window for the expense list and summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum TimeRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    Last365Days,
    All,
}

impl TimeRange {
    /// All ranges in display order
    pub const ALL: [TimeRange; 5] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last90Days,
        Self::Last365Days,
        Self::All,
    ];

    /// Number of calendar days covered, `None` for all time
    pub fn days(&self) -> Option<u32> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::Last365Days => Some(365),
            Self::All => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::Last365Days => "Last 12 months",
            Self::All => "All time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            Some(days) => write!(f, "{}", days),
            None => write!(f, "all"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7" => Ok(Self::Last7Days),
            "30" => Ok(Self::Last30Days),
            "90" => Ok(Self::Last90Days),
            "365" => Ok(Self::Last365Days),
            "all" => Ok(Self::All),
            other => Err(format!(
                "Invalid time range '{}' (expected 7, 30, 90, 365 or all)",
                other
            )),
        }
    }
}

impl TryFrom<String> for TimeRange {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(range: TimeRange) -> Self {
        range.to_string()
    }
}

/// Category constraint of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|e| e.to_string())
    }
}

/// Filter selection for one query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub time_range: TimeRange,
    pub category: CategoryFilter,
    pub search_text: String,
}

impl FilterSelection {
    /// Selection with the given range and no other constraints
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            time_range,
            ..Self::default()
        }
    }

    /// Restrict to one category
    pub fn category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Restrict to descriptions containing `text`
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }
}
