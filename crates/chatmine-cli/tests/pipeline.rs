//! End-to-end pipeline tests: chat export on disk → curated / browsed output.

use std::collections::HashSet;

use chatmine_core::{BrowseOptions, CurateOptions, DataPaths, Period};
use chatmine_curate::SnippetSelector;
use serde_json::json;

fn write_export(paths: &DataPaths, period: Period, messages: serde_json::Value) {
    std::fs::create_dir_all(&paths.raw_data).unwrap();
    std::fs::write(
        paths.archive_path(period),
        json!({ "messages": messages }).to_string(),
    )
    .unwrap();
}

fn sample_messages() -> serde_json::Value {
    json!([
        { "date": "2019-12-24", "user": "A", "content": "聖誕快樂！" },
        { "date": "2019-12-24", "user": "B", "content": "謝謝寶寶 晚安" },
        { "date": "2019-12-24", "user": "A", "content": "[貼圖]" },
        { "date": "2019-12-25", "user": "A", "content": "哈哈哈笑死" },
        { "date": "2019-12-25", "user": "B", "content": "真的假的？" },
        { "date": "2019-12-25", "user": "A", "content": "真的啦" },
        { "date": "2019-12-26", "user": "A", "content": "早" },
        { "date": "2019-12-26", "user": "B", "content": "上班中" },
        { "date": "2019-12-27", "user": "A", "content": "上班中" },
        { "date": "2019-12-27", "user": "B", "content": "開會中" },
        { "date": "2019-12-27", "user": "A", "content": "下班了" },
        { "date": "2019-12-27", "user": "B", "content": "回家了" },
        { "date": "2019-12-27", "user": "A", "content": "洗澡了" },
        { "date": "2019-12-27", "user": "B", "content": "睡覺了" }
    ])
}

#[test]
fn test_curate_from_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    write_export(&paths, Period::Early, sample_messages());

    let messages = chatmine_archive::load_period(&paths, Period::Early).unwrap();
    let report = SnippetSelector::default().curate_archive(&messages, &CurateOptions::default());

    let dates: Vec<&str> = report.selected.iter().map(|s| s.date.as_str()).collect();
    // 12-26 has one valid message; 12-27 has no keyword hits.
    assert_eq!(dates.len(), 2);
    assert!(dates.contains(&"2019-12-24"));
    assert!(dates.contains(&"2019-12-25"));
    assert!(report.selected.windows(2).all(|w| w[0].score >= w[1].score));

    chatmine_archive::write_curated(&paths.curated_output, &[(Period::Early, report.selected)])
        .unwrap();
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.curated_output).unwrap()).unwrap();
    let snippets = doc["2019-2020"].as_array().unwrap();
    assert_eq!(snippets.len(), 2);
    for snippet in snippets {
        let n = snippet["messages"].as_array().unwrap().len();
        assert!((2..=5).contains(&n));
        let types = snippet["question_types"].as_array().unwrap();
        assert!(!types.is_empty() && types.len() <= 2);
    }
}

#[test]
fn test_browse_skips_dates_in_question_bank() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    write_export(&paths, Period::Early, sample_messages());
    std::fs::write(
        &paths.question_bank,
        json!([{ "id": 1, "conversation": { "date": "2019-12-25" } }]).to_string(),
    )
    .unwrap();

    let messages = chatmine_archive::load_period(&paths, Period::Early).unwrap();
    let used = chatmine_archive::load_used_dates(&paths.question_bank).unwrap();
    let selector = SnippetSelector::default();

    let report = selector
        .browse(&messages, &BrowseOptions::default(), &used)
        .unwrap();
    let dates: Vec<&str> = report.ranked.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, vec!["2019-12-24"]);
    assert_eq!(report.excluded_dates, 1);

    let everything = selector
        .browse(
            &messages,
            &BrowseOptions {
                exclude_used: false,
                ..Default::default()
            },
            &HashSet::new(),
        )
        .unwrap();
    assert_eq!(everything.ranked.len(), 2);
}

#[test]
fn test_missing_period_export() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    let err = chatmine_archive::load_period(&paths, Period::Recent).unwrap_err();
    assert!(matches!(err, chatmine_core::Error::NotFound(_)));
}
