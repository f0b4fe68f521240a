//! Human-readable listings.

use std::fmt::Write;

use chatmine_core::Period;
use chatmine_curate::{BrowseReport, DateCandidate};
use chatmine_extract::{Message, ScoredSnippet};

const RULE: &str =
    "================================================================================";

/// Why a snippet is worth a question, from its tags.
pub fn highlight_reasons(tags: &[String]) -> String {
    let reasons: Vec<&str> = tags
        .iter()
        .filter_map(|tag| match tag.as_str() {
            "笑点" => Some("has a punchline"),
            "温馨" => Some("warm exchange"),
            "特殊事件" => Some("special occasion"),
            "有梗" => Some("fun reaction"),
            "認真" => Some("serious discussion"),
            _ => None,
        })
        .collect();

    if reasons.is_empty() {
        "memorable exchange".to_string()
    } else {
        reasons.join(" + ")
    }
}

fn write_excerpt(out: &mut String, messages: &[Message], indent: &str) {
    for m in messages {
        let _ = writeln!(out, "{}{}: {}", indent, m.user, m.content);
    }
}

/// Listing of one period's curated snippets.
pub fn render_curated(period: Period, snippets: &[ScoredSnippet]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {} snippets", period, snippets.len());
    let _ = writeln!(out);

    for (i, snippet) in snippets.iter().enumerate() {
        let types: Vec<&str> = snippet.question_types.iter().map(|t| t.as_str()).collect();
        let _ = writeln!(out, "{}. Date: {}", i + 1, snippet.date);
        let _ = writeln!(
            out,
            "   Score: {} | Tags: {}",
            snippet.score,
            snippet.tags.join(", ")
        );
        let _ = writeln!(out, "   Suggested types: {}", types.join(", "));
        let _ = writeln!(out, "   Conversation:");
        write_excerpt(&mut out, &snippet.messages, "     ");
        let _ = writeln!(out, "   Why: {}", highlight_reasons(&snippet.tags));
        let _ = writeln!(out);
    }
    out
}

/// Header and the requested page of a browsing result.
pub fn render_browse_page(period: Period, report: &BrowseReport) -> String {
    let mut out = String::new();
    let (start, end) = report.page_bounds();
    let total = report.ranked.len();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Candidate dates - {}", period);
    let _ = writeln!(
        out,
        "{} valid messages over {} dates, {} already used",
        report.valid_messages, report.total_dates, report.excluded_dates
    );
    if start == end {
        let _ = writeln!(out, "No results at offset {} of {}", report.offset, total);
    } else if report.offset > 0 {
        let _ = writeln!(out, "Showing {}-{} of {}", start + 1, end, total);
    } else {
        let _ = writeln!(out, "Showing top {} of {}", end - start, total);
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    for (rank, candidate) in (start + 1..).zip(report.page()) {
        let _ = writeln!(
            out,
            "{}. Date: {} | Score: {} | Messages: {}",
            rank, candidate.date, candidate.score, candidate.total_messages
        );
        let _ = writeln!(out, "   Tags: {}", candidate.tags.join(", "));
        let _ = writeln!(out, "   Snippet:");
        write_excerpt(&mut out, &candidate.snippet, "     ");
        let _ = writeln!(out);
    }
    out
}

/// Full detail of one browsing candidate.
pub fn render_candidate_detail(candidate: &DateCandidate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Details - {}", candidate.date);
    let _ = writeln!(out, "Score: {}", candidate.score);
    let _ = writeln!(out, "Tags: {}", candidate.tags.join(", "));
    let _ = writeln!(out, "Messages that day: {}", candidate.total_messages);
    let _ = writeln!(out, "Snippet:");
    write_excerpt(&mut out, &candidate.snippet, "  ");
    out
}
