//! Chat export loading.

use std::path::Path;

use chatmine_core::{DataPaths, Error, Period, Result};
use chatmine_extract::Message;
use tracing::info;

use crate::types::ChatArchive;

/// Load every message from a chat export file.
pub fn load_archive(path: &Path) -> Result<Vec<Message>> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            Error::NotFound(format!("chat archive {}", path.display()))
        }
        _ => Error::Io(e),
    })?;

    let archive: ChatArchive = serde_json::from_str(&raw)?;
    info!(
        "Loaded {} messages from {}",
        archive.messages.len(),
        path.display()
    );
    Ok(archive.messages)
}

/// Load the export for a named period from the data directory.
pub fn load_period(paths: &DataPaths, period: Period) -> Result<Vec<Message>> {
    load_archive(&paths.archive_path(period))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        let doc = serde_json::json!({
            "messages": [
                { "date": "2020-05-01", "user": "A", "content": "早安", "time": "08:00" },
                { "date": "2020-05-01", "user": "B", "content": "[貼圖]" },
            ]
        });
        std::fs::write(&path, doc.to_string()).unwrap();

        let messages = load_archive(&path).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "早安");
        assert!(messages[0].extra.contains_key("time"));
    }

    #[test]
    fn test_missing_archive_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_archive(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_malformed_archive_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_archive(&path).unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_load_period_uses_raw_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        std::fs::create_dir_all(&paths.raw_data).unwrap();
        std::fs::write(
            paths.archive_path(Period::Middle),
            r#"{"messages": [{"date": "2021-03-01", "user": "A", "content": "哈囉"}]}"#,
        )
        .unwrap();

        assert_eq!(load_period(&paths, Period::Middle).unwrap().len(), 1);
        assert!(load_period(&paths, Period::Early).is_err());
    }
}
