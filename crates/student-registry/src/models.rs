//! Data models for the student registry

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{RegistryError, Result};

/// A single student entry as persisted in the data file.
///
/// Fields are only checked when a submission is accepted. Records read
/// back from disk are taken as they are: a missing text field reads as
/// empty and an id that is not an integer reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Creation timestamp in milliseconds, bumped past the newest stored id
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,

    /// Student name
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,

    /// Roll number, kept as free text
    #[serde(default, deserialize_with = "lenient_text")]
    pub roll: String,

    /// Department name
    #[serde(default, deserialize_with = "lenient_text")]
    pub department: String,
}

impl StudentRecord {
    pub fn new(id: i64, name: String, roll: String, department: String) -> Self {
        Self {
            id: Some(id),
            name,
            roll,
            department,
        }
    }
}

fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Pick the identifier for a record appended after `existing`.
///
/// Uses the wall clock in milliseconds, but never returns a value at or
/// below the newest stored id, so ids stay strictly increasing even when
/// two submissions land within the same millisecond. Fails once the
/// newest id is `i64::MAX`.
pub fn next_id(existing: &[StudentRecord], now_millis: i64) -> Result<i64> {
    match existing.iter().filter_map(|r| r.id).max() {
        Some(last) if now_millis <= last => {
            last.checked_add(1).ok_or(RegistryError::IdsExhausted(last))
        }
        _ => Ok(now_millis),
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
