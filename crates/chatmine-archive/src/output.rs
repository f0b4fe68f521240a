//! Output writers for curated snippets and browsing selections.

use std::collections::BTreeMap;
use std::path::Path;

use chatmine_core::{Period, Result};
use chatmine_extract::ScoredSnippet;
use serde::Serialize;
use tracing::info;

use crate::types::SelectedDates;

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write curated snippets keyed by period label.
pub fn write_curated(path: &Path, results: &[(Period, Vec<ScoredSnippet>)]) -> Result<()> {
    let by_period: BTreeMap<&str, &[ScoredSnippet]> = results
        .iter()
        .map(|(period, snippets)| (period.label(), snippets.as_slice()))
        .collect();
    write_pretty(path, &by_period)?;

    let total: usize = results.iter().map(|(_, s)| s.len()).sum();
    info!("Saved {} curated snippets to {}", total, path.display());
    Ok(())
}

/// Write dates picked in interactive browsing.
pub fn write_selected_dates(path: &Path, selection: &SelectedDates) -> Result<()> {
    write_pretty(path, selection)?;
    info!("Saved {} selected dates to {}", selection.total, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmine_extract::{Message, QuestionType};

    fn snippet(date: &str) -> ScoredSnippet {
        ScoredSnippet {
            date: date.into(),
            messages: vec![
                Message::new(date, "A", "生日快樂"),
                Message::new(date, "B", "謝謝寶寶"),
            ],
            score: 7,
            tags: vec!["温馨".into(), "特殊事件".into()],
            question_types: vec![QuestionType::ContextRecall],
        }
    }

    #[test]
    fn test_write_curated_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("curated_snippets.json");
        let results = vec![
            (Period::Recent, vec![snippet("2024-05-05")]),
            (Period::Early, vec![snippet("2019-09-09"), snippet("2020-01-01")]),
        ];
        write_curated(&path, &results).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("生日快樂"), "non-ASCII text is written verbatim");

        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["2019-2020"].as_array().unwrap().len(), 2);
        let first = &doc["2023-2025"][0];
        assert_eq!(first["date"], "2024-05-05");
        assert_eq!(first["score"], 7);
        assert_eq!(first["tags"][0], "温馨");
        assert_eq!(first["question_types"][0], "context-recall");
        assert_eq!(first["messages"][1]["user"], "B");
    }

    #[test]
    fn test_write_selected_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("selected_dates_ai.json");
        let selection = SelectedDates::new(
            vec!["2019-10-10".into(), "2020-02-20".into()],
            "從 2019-2020 瀏覽選擇的日期",
        );
        write_selected_dates(&path, &selection).unwrap();

        let back: SelectedDates =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, selection);
        assert_eq!(back.total, 2);
    }
}
