//! Final question bank: used-date lookup and uniqueness checks.
//!
//! Entries are kept as raw JSON; only `id` and `conversation.date` matter here.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use chatmine_core::{Error, Result};
use serde_json::Value;
use tracing::info;

/// Load the question bank as a JSON array.
pub fn load_question_bank(path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            Error::NotFound(format!("question bank {}", path.display()))
        }
        _ => Error::Io(e),
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn question_date(question: &Value) -> Option<&str> {
    question
        .get("conversation")
        .and_then(|c| c.get("date"))
        .and_then(|d| d.as_str())
}

/// Dates already turned into questions.
pub fn used_dates(questions: &[Value]) -> HashSet<String> {
    questions
        .iter()
        .filter_map(question_date)
        .map(str::to_string)
        .collect()
}

/// Load used dates from the question bank. A missing bank means nothing has
/// been used yet.
pub fn load_used_dates(path: &Path) -> Result<HashSet<String>> {
    match load_question_bank(path) {
        Ok(questions) => {
            let dates = used_dates(&questions);
            info!("Loaded {} used dates from {}", dates.len(), path.display());
            Ok(dates)
        }
        Err(Error::NotFound(_)) => {
            info!("No question bank at {}, no dates excluded", path.display());
            Ok(HashSet::new())
        }
        Err(e) => Err(e),
    }
}

/// Reject a bank that repeats a conversation date or a question id.
///
/// Every duplicate is reported; nothing is silently dropped.
pub fn validate_question_bank(questions: &[Value]) -> Result<()> {
    let mut seen_dates = HashSet::new();
    let mut dup_dates = BTreeSet::new();
    let mut seen_ids = HashSet::new();
    let mut dup_ids = BTreeSet::new();

    for question in questions {
        if let Some(date) = question_date(question) {
            if !seen_dates.insert(date) {
                dup_dates.insert(date.to_string());
            }
        }
        if let Some(id) = question.get("id").filter(|v| !v.is_null()) {
            let id = match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if !seen_ids.insert(id.clone()) {
                dup_ids.insert(id);
            }
        }
    }

    let mut errors = Vec::new();
    if !dup_dates.is_empty() {
        errors.push(format!(
            "duplicate dates: {}",
            dup_dates.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
    if !dup_ids.is_empty() {
        errors.push(format!(
            "duplicate ids: {}",
            dup_ids.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(id: i64, date: &str) -> Value {
        json!({ "id": id, "conversation": { "date": date, "context": [] } })
    }

    #[test]
    fn test_used_dates() {
        let bank = vec![question(1, "2020-01-01"), question(2, "2020-02-02"), json!({"id": 3})];
        let dates = used_dates(&bank);
        assert_eq!(dates.len(), 2);
        assert!(dates.contains("2020-02-02"));
    }

    #[test]
    fn test_missing_bank_means_no_used_dates() {
        let dir = tempfile::tempdir().unwrap();
        let dates = load_used_dates(&dir.path().join("final_questions_new.json")).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_load_used_dates_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        std::fs::write(&path, json!([question(1, "2022-07-07")]).to_string()).unwrap();
        let dates = load_used_dates(&path).unwrap();
        assert!(dates.contains("2022-07-07"));
    }

    #[test]
    fn test_corrupt_bank_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        std::fs::write(&path, "[{").unwrap();
        assert!(matches!(load_used_dates(&path).unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_validate_clean_bank() {
        let bank = vec![question(1, "a"), question(2, "b")];
        assert!(validate_question_bank(&bank).is_ok());
    }

    #[test]
    fn test_validate_reports_every_duplicate() {
        let bank = vec![
            question(1, "2020-01-01"),
            question(2, "2020-01-01"),
            question(2, "2020-03-03"),
            question(4, "2020-03-03"),
            question(5, "2020-05-05"),
        ];
        match validate_question_bank(&bank) {
            Err(Error::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0], "duplicate dates: 2020-01-01, 2020-03-03");
                assert_eq!(errors[1], "duplicate ids: 2");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
