//! Chatmine command-line surface: argument parsing, listings and the
//! interactive date picker.

pub mod args;
pub mod interactive;
pub mod render;
