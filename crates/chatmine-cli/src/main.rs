//! Chatmine picks memorable chat snippets to seed quiz questions.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use chatmine_cli::args::{BrowseArgs, Cli, Command, CurateArgs};
use chatmine_cli::{interactive, render};
use chatmine_core::{ChatmineConfig, Period};
use chatmine_curate::SnippetSelector;
use chatmine_extract::QuestionType;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("CHATMINE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn run_curate(
    config: &ChatmineConfig,
    selector: &SnippetSelector,
    args: CurateArgs,
) -> anyhow::Result<()> {
    let options = args.options(config);
    let mut results = Vec::new();

    for period in args.periods() {
        info!("Processing {}...", period);
        let messages = chatmine_archive::load_period(&config.data_paths, period)
            .with_context(|| format!("loading period {}", period))?;
        let report = selector.curate_archive(&messages, &options);
        println!("{}", render::render_curated(period, &report.selected));
        results.push((period, report.selected));
    }

    let total: usize = results.iter().map(|(_, s)| s.len()).sum();
    println!("Total: {} snippets", total);

    let output = args
        .output
        .unwrap_or_else(|| config.data_paths.curated_output.clone());
    chatmine_archive::write_curated(&output, &results)?;
    println!("Saved to {}", output.display());
    Ok(())
}

fn run_browse(
    config: &ChatmineConfig,
    selector: &SnippetSelector,
    args: BrowseArgs,
) -> anyhow::Result<()> {
    let options = args.options(config);
    let used_dates = if options.exclude_used {
        chatmine_archive::load_used_dates(&config.data_paths.question_bank)?
    } else {
        HashSet::new()
    };

    let messages = chatmine_archive::load_period(&config.data_paths, args.period)?;
    let report = selector.browse(&messages, &options, &used_dates)?;
    print!("{}", render::render_browse_page(args.period, &report));

    if args.interactive {
        let stdin = std::io::stdin();
        let selection =
            interactive::run_picker(stdin.lock(), std::io::stdout(), &report.ranked, args.period)?;
        if let Some(selection) = selection {
            let output = args
                .output
                .unwrap_or_else(|| config.data_paths.selected_dates.clone());
            chatmine_archive::write_selected_dates(&output, &selection)?;
            println!("Wrote {} dates to {}", selection.total, output.display());
        }
    }
    Ok(())
}

fn run_validate(config: &ChatmineConfig, bank: Option<PathBuf>) -> anyhow::Result<()> {
    let path = bank.unwrap_or_else(|| config.data_paths.question_bank.clone());
    let questions = chatmine_archive::load_question_bank(&path)?;
    chatmine_archive::validate_question_bank(&questions)?;

    println!("Question bank: {} questions, all checks passed", questions.len());
    for period in Period::all() {
        let count = questions
            .iter()
            .filter(|q| q.get("period").and_then(|p| p.as_str()) == Some(period.label()))
            .count();
        println!("  {}: {}", period, count);
    }
    for kind in QuestionType::all() {
        let count = questions
            .iter()
            .filter(|q| q.get("type").and_then(|t| t.as_str()) == Some(kind.as_str()))
            .count();
        println!(
            "  {} ({}, {}): {}",
            kind.category(),
            kind,
            kind.dimension(),
            count
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_dir = resolve_data_dir();
    let config = ChatmineConfig::from_env(&data_dir)?;
    info!("Data directory: {}", data_dir.display());

    let selector = SnippetSelector::default();

    match cli.command {
        Command::Curate(curate) => run_curate(&config, &selector, curate),
        Command::Browse(browse) => run_browse(&config, &selector, browse),
        Command::Validate { bank } => run_validate(&config, bank),
    }
}
