//! Quiz question-type hints from secondary keyword signals.
//!
//! Labels are advisory: a snippet tagged `detail-observation` merely
//! mentions a number, time or place.

use std::borrow::Borrow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::join_contents;
use crate::message::Message;

/// Most categories a snippet is labelled with.
pub const MAX_QUESTION_TYPES: usize = 2;

static DETAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d|時間|地點|什麼時候|哪裡").expect("detail pattern compiles"));

/// Quiz question categories, declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    ContextRecall,
    DetailObservation,
    PreferenceMemory,
    OpinionExpression,
    ActionMotivation,
    ActionIntention,
}

impl QuestionType {
    pub fn all() -> &'static [QuestionType] {
        &[
            Self::ContextRecall,
            Self::DetailObservation,
            Self::PreferenceMemory,
            Self::OpinionExpression,
            Self::ActionMotivation,
            Self::ActionIntention,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContextRecall => "context-recall",
            Self::DetailObservation => "detail-observation",
            Self::PreferenceMemory => "preference-memory",
            Self::OpinionExpression => "opinion-expression",
            Self::ActionMotivation => "action-motivation",
            Self::ActionIntention => "action-intention",
        }
    }

    /// Display label used by the quiz front-end.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ContextRecall => "情境回憶",
            Self::DetailObservation => "細節觀察",
            Self::PreferenceMemory => "偏好記憶",
            Self::OpinionExpression => "評價觀點",
            Self::ActionMotivation => "行為動機",
            Self::ActionIntention => "行為意圖",
        }
    }

    /// Friendship dimension a question of this type scores.
    pub fn dimension(&self) -> &'static str {
        match self {
            Self::ContextRecall => "memory",
            Self::DetailObservation => "observation",
            Self::PreferenceMemory => "care",
            Self::OpinionExpression | Self::ActionIntention => "understanding",
            Self::ActionMotivation => "empathy",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
enum Signal {
    Keywords(&'static [&'static str]),
    Pattern(Regex),
}

impl Signal {
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Keywords(words) => words.iter().any(|w| text.contains(w)),
            Self::Pattern(re) => re.is_match(text),
        }
    }
}

/// Maps snippet text to at most two question categories.
#[derive(Debug, Clone)]
pub struct QuestionClassifier {
    rules: Vec<(QuestionType, Signal)>,
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        let rules = vec![
            (
                QuestionType::ContextRecall,
                Signal::Keywords(&["我", "你", "他", "做", "說", "去", "看", "買", "吃"]),
            ),
            (QuestionType::DetailObservation, Signal::Pattern(DETAIL_PATTERN.clone())),
            (
                QuestionType::PreferenceMemory,
                Signal::Keywords(&["喜歡", "討厭", "想", "要", "愛", "最", "覺得"]),
            ),
            (
                QuestionType::OpinionExpression,
                Signal::Keywords(&["覺得", "認為", "感覺", "好像", "應該"]),
            ),
            (
                QuestionType::ActionMotivation,
                Signal::Keywords(&["因為", "所以", "為什麼", "為了", "原因"]),
            ),
            (
                QuestionType::ActionIntention,
                Signal::Keywords(&["打算", "準備", "要", "會", "將", "想要"]),
            ),
        ];
        Self { rules }
    }
}

impl QuestionClassifier {
    /// First two triggered categories in priority order, or `[context-recall]`.
    pub fn classify(&self, text: &str) -> Vec<QuestionType> {
        let mut types: Vec<QuestionType> = self
            .rules
            .iter()
            .filter(|(_, signal)| signal.matches(text))
            .map(|(kind, _)| *kind)
            .take(MAX_QUESTION_TYPES)
            .collect();

        if types.is_empty() {
            types.push(QuestionType::ContextRecall);
        }
        types
    }

    /// Classify the joined contents of a message run.
    pub fn classify_messages<M: Borrow<Message>>(&self, messages: &[M]) -> Vec<QuestionType> {
        self.classify(&join_contents(messages))
    }
}
