//! Command-line arguments.
//!
//! Numeric defaults come from [`ChatmineConfig`], so flags left unset fall
//! back to the environment overrides before the built-in defaults.

use std::path::PathBuf;

use chatmine_core::{BrowseOptions, ChatmineConfig, CurateOptions, Period};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "chatmine",
    about = "Mine a chat archive for quiz-worthy snippets",
    version,
    arg_required_else_help = true,
    after_help = "Environment:\n  CHATMINE_DATA_DIR        Data directory (default: data)\n  \
                  CHATMINE_TARGET_COUNT    Default --target\n  \
                  CHATMINE_MIN_SCORE       Default --min-score\n  \
                  RUST_LOG                 Log filter (default: info)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick top snippets per period, one per date.
    Curate(CurateArgs),
    /// List the best snippet per date, ranked by score.
    Browse(BrowseArgs),
    /// Check the question bank for duplicate dates and ids.
    Validate {
        /// Question bank file (default: data/final_questions_new.json).
        bank: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct CurateArgs {
    /// Limit to a period (repeatable; default: all).
    #[arg(long = "period", value_name = "PERIOD")]
    pub periods: Vec<Period>,

    /// Snippets per period (default 12).
    #[arg(long)]
    pub target: Option<usize>,

    /// Candidates must score above this (default 2).
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i32>,

    /// Output file (default: data/curated_snippets.json).
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CurateArgs {
    /// Requested periods in order, without repeats. Empty means all of them.
    pub fn periods(&self) -> Vec<Period> {
        if self.periods.is_empty() {
            return Period::all().to_vec();
        }
        let mut periods = Vec::new();
        for &period in &self.periods {
            if !periods.contains(&period) {
                periods.push(period);
            }
        }
        periods
    }

    pub fn options(&self, config: &ChatmineConfig) -> CurateOptions {
        let mut options = config.curate;
        if let Some(target) = self.target {
            options.target_count = target;
        }
        if let Some(threshold) = self.threshold {
            options.candidate_threshold = threshold;
        }
        options
    }
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// 2019-2020 | 2021-2022 | 2023-2025.
    #[arg(long, default_value = "2019-2020")]
    pub period: Period,

    /// Only dates tagged 笑点/温馨/特殊事件/有梗/認真.
    #[arg(long)]
    pub tag: Option<String>,

    /// Page size (default 20).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Skip the first n results.
    #[arg(long)]
    pub offset: Option<usize>,

    /// Minimum score (default 3).
    #[arg(long, allow_negative_numbers = true)]
    pub min_score: Option<i32>,

    /// Keep dates already in the question bank.
    #[arg(long)]
    pub include_used: bool,

    /// Pick dates interactively after listing.
    #[arg(long)]
    pub interactive: bool,

    /// Selection file (default: data/config/selected_dates_ai.json).
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl BrowseArgs {
    pub fn options(&self, config: &ChatmineConfig) -> BrowseOptions {
        let mut options = config.browse.clone();
        if self.tag.is_some() {
            options.tag = self.tag.clone();
        }
        if let Some(limit) = self.limit {
            options.limit = limit;
        }
        if let Some(offset) = self.offset {
            options.offset = offset;
        }
        if let Some(min_score) = self.min_score {
            options.min_score = min_score;
        }
        if self.include_used {
            options.exclude_used = false;
        }
        options
    }
}
