//! Chatmine Extract: message filtering, day grouping, keyword scoring,
//! snippet window search and question-type hints.

pub mod extract;
pub mod message;

pub use extract::question_types::{QuestionClassifier, QuestionType};
pub use extract::scoring::{score_conversation, ConversationScore};
pub use extract::taxonomy::{KeywordTaxonomy, TagTriggers};
pub use extract::window::{best_snippet, exhaustive_candidates, BestSnippet};
pub use extract::{join_contents, ScoredSnippet};
pub use message::{filter_valid_messages, group_by_date, is_valid_message, Day, DayGroups, Message};
