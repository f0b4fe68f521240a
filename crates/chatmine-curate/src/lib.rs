//! Chatmine Curate: ranks scored snippets and picks the ones worth turning
//! into quiz questions.

pub mod selector;
pub mod types;

pub use selector::{curate, SnippetSelector};
pub use types::*;
