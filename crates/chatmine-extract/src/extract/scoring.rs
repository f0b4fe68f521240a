//! Conversation salience scoring.
//!
//! Score = one point per matching (tag, trigger) pair, +2 for a run of 2–5
//! messages, +1 if any message asks a question.

use std::borrow::Borrow;

use super::join_contents;
use super::taxonomy::KeywordTaxonomy;
use crate::message::Message;

/// Shortest and longest run that earns the length bonus.
pub const MIN_SNIPPET_LEN: usize = 2;
pub const MAX_SNIPPET_LEN: usize = 5;

const LENGTH_BONUS: i32 = 2;
const QUESTION_BONUS: i32 = 1;
const QUESTION_MARKS: &[char] = &['?', '？'];

/// Score and matched tags for a message run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationScore {
    pub score: i32,
    /// Matched tags in taxonomy order, each listed once.
    pub tags: Vec<String>,
}

/// Score a short run of messages against the taxonomy.
pub fn score_conversation<M: Borrow<Message>>(
    taxonomy: &KeywordTaxonomy,
    messages: &[M],
) -> ConversationScore {
    let text = join_contents(messages);
    let mut result = ConversationScore::default();

    for entry in taxonomy.tags() {
        let hits = entry
            .triggers
            .iter()
            .filter(|t| text.contains(t.as_str()))
            .count();
        if hits > 0 {
            result.score += hits as i32;
            result.tags.push(entry.tag.clone());
        }
    }

    if (MIN_SNIPPET_LEN..=MAX_SNIPPET_LEN).contains(&messages.len()) {
        result.score += LENGTH_BONUS;
    }

    if messages
        .iter()
        .any(|m| m.borrow().content.contains(QUESTION_MARKS))
    {
        result.score += QUESTION_BONUS;
    }

    result
}
