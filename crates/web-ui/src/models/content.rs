//! Data models for the content moderation dashboard

use serde::{Deserialize, Serialize};

/// Dashboard tab selection.
///
/// Picks which moderation queue the form displays. No record field
/// distinguishes the two queues, so the tab never participates in the filter
/// predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    Validation,
    Promotion,
}

impl DashboardTab {
    /// Get display text for the tab strip
    pub fn display_text(&self) -> &'static str {
        match self {
            DashboardTab::Validation => "Validation",
            DashboardTab::Promotion => "Promotion",
        }
    }
}

/// One content record in the moderation listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub name: String,
    pub creator: String,
    pub description: String,
    #[serde(default)]
    pub contents: u32,
    #[serde(default)]
    pub views: u32,
    pub date: String,
}

impl ContentRecord {
    /// Rows holding more than five content items get a highlight marker
    pub fn is_rich(&self) -> bool {
        self.contents > 5
    }

    /// Views render as a highlighted badge only when non-zero
    pub fn has_views(&self) -> bool {
        self.views > 0
    }
}

/// User-entered filter constraints for the moderation listing.
///
/// Empty string fields mean "no constraint", never "match the empty string".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub tab: DashboardTab,
    pub title: String,
    pub content: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            tab: DashboardTab::Validation,
            title: String::new(),
            content: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Whether no clause constrains the record set
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && !self.has_date_range()
    }

    /// The date clause applies only when both bounds are set
    pub fn has_date_range(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }
}
