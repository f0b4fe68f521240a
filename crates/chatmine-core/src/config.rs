//! Configuration, archive periods and data directory layout.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default number of snippets picked per period in curation mode.
pub const DEFAULT_TARGET_COUNT: usize = 12;
/// Exhaustive-mode candidates must score strictly above this.
pub const DEFAULT_CANDIDATE_THRESHOLD: i32 = 2;
/// Browsing mode keeps days scoring at least this.
pub const DEFAULT_MIN_SCORE: i32 = 3;
pub const DEFAULT_LIMIT: usize = 20;

/// A named slice of the chat archive. Each period lives in its own export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "2019-2020")]
    Early,
    #[serde(rename = "2021-2022")]
    Middle,
    #[serde(rename = "2023-2025")]
    Recent,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[Self::Early, Self::Middle, Self::Recent]
    }

    /// Label used on the command line and as the key of curated output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Early => "2019-2020",
            Self::Middle => "2021-2022",
            Self::Recent => "2023-2025",
        }
    }

    /// File name of the raw export for this period.
    pub fn archive_file(&self) -> &'static str {
        match self {
            Self::Early => "chat_2019_2020.json",
            Self::Middle => "chat_2021_2022.json",
            Self::Recent => "chat_2023_2025.json",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.label() == s)
            .ok_or_else(|| {
                let choices: Vec<&str> = Self::all().iter().map(|p| p.label()).collect();
                Error::InvalidArgument(format!(
                    "unknown period '{}', expected one of: {}",
                    s,
                    choices.join(", ")
                ))
            })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Paths to the files Chatmine reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Raw chat exports, one per period (`data/raw_data/`).
    pub raw_data: PathBuf,
    /// Final question bank, source of already-used dates (`data/final_questions_new.json`).
    pub question_bank: PathBuf,
    /// Curation output (`data/curated_snippets.json`).
    pub curated_output: PathBuf,
    /// Interactive browsing selection (`data/config/selected_dates_ai.json`).
    pub selected_dates: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            raw_data: root.join("raw_data"),
            question_bank: root.join("final_questions_new.json"),
            curated_output: root.join("curated_snippets.json"),
            selected_dates: root.join("config").join("selected_dates_ai.json"),
            root,
        }
    }

    /// Path of the raw export for a period.
    pub fn archive_path(&self, period: Period) -> PathBuf {
        self.raw_data.join(period.archive_file())
    }
}

/// Options for corpus curation (target-count mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurateOptions {
    /// Number of snippets to pick; fewer come back when too few dates qualify.
    pub target_count: usize,
    /// Exclusive lower bound a window must beat to become a candidate.
    pub candidate_threshold: i32,
}

impl Default for CurateOptions {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            candidate_threshold: DEFAULT_CANDIDATE_THRESHOLD,
        }
    }
}

/// Options for candidate browsing (threshold mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseOptions {
    /// Keep only dates whose best snippet carries this tag.
    pub tag: Option<String>,
    pub limit: usize,
    pub offset: usize,
    /// Inclusive minimum score for a date to be listed.
    pub min_score: i32,
    /// Skip dates already present in the used-dates set.
    pub exclude_used: bool,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            tag: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
            min_score: DEFAULT_MIN_SCORE,
            exclude_used: true,
        }
    }
}

/// Top-level Chatmine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatmineConfig {
    pub data_paths: DataPaths,
    pub curate: CurateOptions,
    pub browse: BrowseOptions,
}

impl ChatmineConfig {
    /// Create configuration from environment and defaults.
    ///
    /// `CHATMINE_TARGET_COUNT` and `CHATMINE_MIN_SCORE` override the
    /// corresponding defaults; unparsable values are a configuration error.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        let mut curate = CurateOptions::default();
        let mut browse = BrowseOptions::default();

        if let Some(count) = env_number::<usize>("CHATMINE_TARGET_COUNT")? {
            debug!("CHATMINE_TARGET_COUNT override: {}", count);
            curate.target_count = count;
        }
        if let Some(score) = env_number::<i32>("CHATMINE_MIN_SCORE")? {
            debug!("CHATMINE_MIN_SCORE override: {}", score);
            browse.min_score = score;
        }

        Ok(Self {
            data_paths: DataPaths::new(data_dir),
            curate,
            browse,
        })
    }
}

fn env_number<T: FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}
