//! Selection results.

use chatmine_extract::{Message, ScoredSnippet};
use serde::Serialize;

/// Result of running curation over one archive.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CurationReport {
    /// Picked snippets, highest score first, one per date.
    pub selected: Vec<ScoredSnippet>,
    #[serde(rename = "candidatesConsidered")]
    pub candidates_considered: usize,
    #[serde(rename = "daysScanned")]
    pub days_scanned: usize,
    #[serde(rename = "validMessages")]
    pub valid_messages: usize,
}

/// Best snippet of one date, as listed in browsing mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateCandidate {
    pub date: String,
    pub score: i32,
    pub tags: Vec<String>,
    pub snippet: Vec<Message>,
    /// Valid messages sent that day.
    #[serde(rename = "totalMessages")]
    pub total_messages: usize,
}

impl DateCandidate {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Ranked browsing result plus the requested page window.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BrowseReport {
    /// Every qualifying date, highest score first.
    pub ranked: Vec<DateCandidate>,
    pub offset: usize,
    pub limit: usize,
    #[serde(rename = "validMessages")]
    pub valid_messages: usize,
    #[serde(rename = "totalDates")]
    pub total_dates: usize,
    /// Dates skipped because they were already used.
    #[serde(rename = "excludedDates")]
    pub excluded_dates: usize,
    /// Dates at or above the score threshold, before tag filtering.
    #[serde(rename = "qualifyingDates")]
    pub qualifying_dates: usize,
}

impl BrowseReport {
    /// Half-open index range of the requested page within `ranked`.
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = self.offset.min(self.ranked.len());
        let end = self.offset.saturating_add(self.limit).min(self.ranked.len());
        (start, end)
    }

    pub fn page(&self) -> &[DateCandidate] {
        let (start, end) = self.page_bounds();
        &self.ranked[start..end]
    }
}
