//! File formats read and written by Chatmine.

use chatmine_extract::Message;
use serde::{Deserialize, Serialize};

/// Raw chat export: `{ "messages": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatArchive {
    pub messages: Vec<Message>,
}

/// Dates picked interactively while browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDates {
    pub dates: Vec<String>,
    pub total: usize,
    pub notes: String,
}

impl SelectedDates {
    pub fn new(dates: Vec<String>, notes: impl Into<String>) -> Self {
        Self {
            total: dates.len(),
            dates,
            notes: notes.into(),
        }
    }
}
