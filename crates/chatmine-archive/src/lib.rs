//! Chatmine Archive: reads chat exports and the question bank, writes
//! curated snippets and browsing selections.
//!
//! The extraction core never touches the filesystem; everything it needs
//! from disk is loaded here and handed over as plain values.

pub mod archive;
pub mod bank;
pub mod output;
pub mod types;

pub use archive::{load_archive, load_period};
pub use bank::{load_question_bank, load_used_dates, used_dates, validate_question_bank};
pub use output::{write_curated, write_selected_dates};
pub use types::*;
