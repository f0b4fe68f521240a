//! Chat message model, validity filter and per-day grouping.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Placeholders the chat export writes in place of non-text content.
pub const PHOTO_MARKER: &str = "[照片]";
pub const STICKER_MARKER: &str = "[貼圖]";
pub const VIDEO_MARKER: &str = "[影片]";
pub const CALL_MARKER: &str = "☎";

const NON_TEXT_MARKERS: &[&str] = &[PHOTO_MARKER, STICKER_MARKER, VIDEO_MARKER, CALL_MARKER];

/// One exported chat message.
///
/// Fields other than `date`, `user` and `content` are kept in `extra` and
/// written back out unchanged. Missing or non-string values read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub user: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub content: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Message {
    pub fn new(
        date: impl Into<String>,
        user: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            user: user.into(),
            content: content.into(),
            extra: serde_json::Map::new(),
        }
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Whether a message carries real text worth scoring.
pub fn is_valid_message(message: &Message) -> bool {
    let content = message.content.as_str();
    !content.is_empty()
        && content.chars().count() > 1
        && !NON_TEXT_MARKERS.iter().any(|m| content.contains(m))
}

/// Keep only text messages, preserving order.
pub fn filter_valid_messages(messages: &[Message]) -> Vec<&Message> {
    let valid: Vec<&Message> = messages.iter().filter(|m| is_valid_message(m)).collect();
    debug!("Kept {} of {} messages", valid.len(), messages.len());
    valid
}

/// Messages sent on one date, in archive order.
#[derive(Debug, Clone)]
pub struct Day<'a> {
    pub date: &'a str,
    pub messages: Vec<&'a Message>,
}

/// Messages bucketed by date. Buckets iterate in the order their date was
/// first seen.
#[derive(Debug, Clone, Default)]
pub struct DayGroups<'a> {
    days: Vec<Day<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> DayGroups<'a> {
    pub fn push(&mut self, message: &'a Message) {
        let date = message.date.as_str();
        match self.index.get(date) {
            Some(&i) => self.days[i].messages.push(message),
            None => {
                self.index.insert(date, self.days.len());
                self.days.push(Day {
                    date,
                    messages: vec![message],
                });
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day<'a>> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'a, 'g> IntoIterator for &'g DayGroups<'a> {
    type Item = &'g Day<'a>;
    type IntoIter = std::slice::Iter<'g, Day<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Partition messages by their `date` key. No calendar parsing is done.
pub fn group_by_date<'a, I>(messages: I) -> DayGroups<'a>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut groups = DayGroups::default();
    for message in messages {
        groups.push(message);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(date: &str, content: &str) -> Message {
        Message::new(date, "A", content)
    }

    #[test]
    fn test_filter_drops_media_and_short() {
        let messages = vec![
            msg("d", "早安"),
            msg("d", "[照片]"),
            msg("d", "看這個 [貼圖]"),
            msg("d", "[影片]"),
            msg("d", "☎ 通話時間 3:12"),
            msg("d", "嗯"),
            msg("d", ""),
            msg("d", "ok"),
        ];
        let valid = filter_valid_messages(&messages);
        let contents: Vec<&str> = valid.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["早安", "ok"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // A single CJK character is 3 bytes but only 1 character.
        assert!(!is_valid_message(&msg("d", "好")));
        assert!(is_valid_message(&msg("d", "好啊")));
    }

    #[test]
    fn test_filter_preserves_order() {
        let messages: Vec<Message> = (0..6)
            .map(|i| msg("d", if i % 2 == 0 { "[照片]" } else { "內容" }))
            .enumerate()
            .map(|(i, mut m)| {
                m.user = i.to_string();
                m
            })
            .collect();
        let valid = filter_valid_messages(&messages);
        let users: Vec<&str> = valid.iter().map(|m| m.user.as_str()).collect();
        assert_eq!(users, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_missing_and_malformed_fields_read_empty() {
        let messages: Vec<Message> = serde_json::from_str(
            r#"[{"date": "2020-01-01", "user": "A"},
                {"date": "2020-01-01", "user": "B", "content": 42},
                {"date": "2020-01-01", "user": "C", "content": "哈囉", "time": "10:00"}]"#,
        )
        .unwrap();
        assert_eq!(messages[0].content, "");
        assert_eq!(messages[1].content, "");
        assert_eq!(messages[2].extra.get("time").and_then(|v| v.as_str()), Some("10:00"));

        let valid = filter_valid_messages(&messages);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].user, "C");
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let raw = r#"{"date":"d","user":"A","content":"嗨嗨","type":"text"}"#;
        let m: Message = serde_json::from_str(raw).unwrap();
        let out = serde_json::to_value(&m).unwrap();
        assert_eq!(out["type"], "text");
        assert_eq!(out["content"], "嗨嗨");
    }

    #[test]
    fn test_group_by_date_stable() {
        let messages = vec![
            msg("2020-01-02", "一一"),
            msg("2020-01-01", "二二"),
            msg("2020-01-02", "三三"),
            msg("2020-01-01", "四四"),
        ];
        let groups = group_by_date(&messages);
        assert_eq!(groups.len(), 2);

        let dates: Vec<&str> = groups.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec!["2020-01-02", "2020-01-01"]);

        let day = groups.iter().next().unwrap();
        let contents: Vec<&str> = day.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["一一", "三三"]);
    }

    #[test]
    fn test_group_dates_are_opaque_keys() {
        let messages = vec![msg("2020-1-1", "甲甲"), msg("2020-01-01", "乙乙")];
        let groups = group_by_date(&messages);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().any(|d| d.date == "2020-01-01"));
        assert!(group_by_date(std::iter::empty()).is_empty());
    }
}
