//! Chatmine Core: error type, period registry, configuration.

pub mod config;
pub mod error;

pub use config::{BrowseOptions, ChatmineConfig, CurateOptions, DataPaths, Period};
pub use error::{Error, Result};
