//! Sliding-window snippet search over one day's messages.

use tracing::trace;

use super::question_types::QuestionClassifier;
use super::scoring::{score_conversation, MAX_SNIPPET_LEN, MIN_SNIPPET_LEN};
use super::taxonomy::KeywordTaxonomy;
use super::ScoredSnippet;
use crate::message::Message;

/// Messages used when a day is too short to form any window.
const FALLBACK_LEN: usize = 4;

/// Highest-scoring window of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSnippet<'a> {
    pub score: i32,
    pub tags: Vec<String>,
    pub messages: Vec<&'a Message>,
}

/// Find the single best window in a day.
///
/// Windows are tried by ascending length, then ascending start; a later
/// window only wins with a strictly higher score. A day with fewer than two
/// messages falls back to its first few messages, scored as they are.
pub fn best_snippet<'a>(taxonomy: &KeywordTaxonomy, day: &[&'a Message]) -> BestSnippet<'a> {
    let n = day.len();
    let mut best: Option<BestSnippet<'a>> = None;

    for len in MIN_SNIPPET_LEN..=MAX_SNIPPET_LEN.min(n) {
        for start in 0..=(n - len) {
            let window = &day[start..start + len];
            let scored = score_conversation(taxonomy, window);
            if best.as_ref().map_or(true, |b| scored.score > b.score) {
                best = Some(BestSnippet {
                    score: scored.score,
                    tags: scored.tags,
                    messages: window.to_vec(),
                });
            }
        }
    }

    best.unwrap_or_else(|| {
        let window = &day[..FALLBACK_LEN.min(n)];
        let scored = score_conversation(taxonomy, window);
        BestSnippet {
            score: scored.score,
            tags: scored.tags,
            messages: window.to_vec(),
        }
    })
}

/// Every window of length 2–5 scoring strictly above `threshold`.
///
/// Candidates come out by start index, then length. Days with fewer than two
/// messages produce nothing.
pub fn exhaustive_candidates(
    taxonomy: &KeywordTaxonomy,
    classifier: &QuestionClassifier,
    date: &str,
    day: &[&Message],
    threshold: i32,
) -> Vec<ScoredSnippet> {
    let n = day.len();
    let mut candidates = Vec::new();
    if n < MIN_SNIPPET_LEN {
        return candidates;
    }

    for start in 0..n - 1 {
        for len in MIN_SNIPPET_LEN..=MAX_SNIPPET_LEN {
            if start + len > n {
                break;
            }
            let window = &day[start..start + len];
            let scored = score_conversation(taxonomy, window);
            if scored.score > threshold {
                candidates.push(ScoredSnippet {
                    date: date.to_string(),
                    messages: window.iter().map(|m| (*m).clone()).collect(),
                    score: scored.score,
                    tags: scored.tags,
                    question_types: classifier.classify_messages(window),
                });
            }
        }
    }

    trace!("{}: {} candidates above {}", date, candidates.len(), threshold);
    candidates
}
