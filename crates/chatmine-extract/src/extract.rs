//! Heuristic snippet extraction.
//!
//! Tags and scores short runs of chat messages by keyword hits, searches each
//! day for its best-scoring windows, and labels snippets with likely quiz
//! question types. Everything is plain substring matching.

pub mod question_types;
pub mod scoring;
pub mod taxonomy;
pub mod window;

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::message::Message;
use question_types::QuestionType;

/// A scored excerpt from one day of chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSnippet {
    pub date: String,
    pub messages: Vec<Message>,
    pub score: i32,
    /// Matched taxonomy tags, in taxonomy order.
    pub tags: Vec<String>,
    /// At most two advisory question categories.
    pub question_types: Vec<QuestionType>,
}

impl ScoredSnippet {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Join message contents into one search text.
pub fn join_contents<M: Borrow<Message>>(messages: &[M]) -> String {
    messages
        .iter()
        .map(|m| m.borrow().content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
