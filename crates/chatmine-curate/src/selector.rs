//! Snippet selection over a whole archive.
//!
//! Curation collects every window that clears the candidate threshold and
//! greedily keeps the best one per date. Browsing keeps one best window per
//! date and filters, ranks and pages them.

use std::collections::HashSet;

use chatmine_core::{BrowseOptions, CurateOptions, Error, Result};
use chatmine_extract::{
    best_snippet, exhaustive_candidates, filter_valid_messages, group_by_date, KeywordTaxonomy,
    Message, QuestionClassifier, ScoredSnippet,
};
use tracing::{debug, info};

use crate::types::{BrowseReport, CurationReport, DateCandidate};

/// Greedily pick up to `target_count` snippets with distinct dates.
///
/// Candidates are stably sorted by descending score, so equal scores keep
/// the order they were discovered in.
pub fn curate(mut candidates: Vec<ScoredSnippet>, target_count: usize) -> Vec<ScoredSnippet> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut used_dates: HashSet<String> = HashSet::new();
    let mut selected = Vec::with_capacity(target_count.min(candidates.len()));

    for snippet in candidates {
        if selected.len() >= target_count {
            break;
        }
        if used_dates.insert(snippet.date.clone()) {
            selected.push(snippet);
        }
    }

    selected
}

/// Runs the extraction pipeline with a fixed taxonomy and classifier.
#[derive(Debug, Clone, Default)]
pub struct SnippetSelector {
    taxonomy: KeywordTaxonomy,
    classifier: QuestionClassifier,
}

impl SnippetSelector {
    /// Curation mode: top `target_count` snippets, no two on the same date.
    pub fn curate_archive(&self, messages: &[Message], options: &CurateOptions) -> CurationReport {
        let valid = filter_valid_messages(messages);
        let days = group_by_date(valid.iter().copied());

        let mut candidates = Vec::new();
        for day in &days {
            let found = exhaustive_candidates(
                &self.taxonomy,
                &self.classifier,
                day.date,
                &day.messages,
                options.candidate_threshold,
            );
            debug!("{}: {} candidate windows", day.date, found.len());
            candidates.extend(found);
        }

        let candidates_considered = candidates.len();
        let selected = curate(candidates, options.target_count);

        info!(
            "Curation: {} valid messages, {} days, {} candidates, {} selected",
            valid.len(),
            days.len(),
            candidates_considered,
            selected.len()
        );

        CurationReport {
            selected,
            candidates_considered,
            days_scanned: days.len(),
            valid_messages: valid.len(),
        }
    }

    /// Browsing mode: best snippet per date, filtered, ranked and paged.
    ///
    /// `used_dates` is only consulted when `options.exclude_used` is set.
    pub fn browse(
        &self,
        messages: &[Message],
        options: &BrowseOptions,
        used_dates: &HashSet<String>,
    ) -> Result<BrowseReport> {
        if let Some(tag) = &options.tag {
            if !self.taxonomy.contains_tag(tag) {
                let known: Vec<&str> = self.taxonomy.tag_names().collect();
                return Err(Error::InvalidArgument(format!(
                    "unknown tag '{}', expected one of: {}",
                    tag,
                    known.join(", ")
                )));
            }
        }

        let valid = filter_valid_messages(messages);
        let days = group_by_date(valid.iter().copied());

        let mut excluded_dates = 0;
        let mut ranked = Vec::new();
        for day in &days {
            if options.exclude_used && used_dates.contains(day.date) {
                excluded_dates += 1;
                continue;
            }
            if day.messages.len() < 2 {
                continue;
            }

            let best = best_snippet(&self.taxonomy, &day.messages);
            if best.score >= options.min_score {
                ranked.push(DateCandidate {
                    date: day.date.to_string(),
                    score: best.score,
                    tags: best.tags,
                    snippet: best.messages.into_iter().cloned().collect(),
                    total_messages: day.messages.len(),
                });
            }
        }

        let qualifying_dates = ranked.len();
        if let Some(tag) = &options.tag {
            ranked.retain(|c| c.has_tag(tag));
        }
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        info!(
            "Browse: {} valid messages, {} dates, {} excluded, {} scoring >= {}, {} listed",
            valid.len(),
            days.len(),
            excluded_dates,
            qualifying_dates,
            options.min_score,
            ranked.len()
        );

        Ok(BrowseReport {
            ranked,
            offset: options.offset,
            limit: options.limit,
            valid_messages: valid.len(),
            total_dates: days.len(),
            excluded_dates,
            qualifying_dates,
        })
    }
}
