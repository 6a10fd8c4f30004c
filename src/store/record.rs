//! Record: the rater's decision for one task.

use crate::generator::{Task, TaskMetadata};
use crate::types::{Choice, TaskId};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// A decision plus a copy of the task it was made on.
///
/// Field names match the persisted document: `timestamp`, `A`, `B`,
/// `choice`, `metadata`. Timestamps are written as RFC 3339; on read an
/// ISO-8601 timestamp without an offset is taken as local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "timestamp", deserialize_with = "deserialize_timestamp")]
    pub recorded_at: DateTime<Local>,

    #[serde(rename = "A")]
    pub item_a: PathBuf,

    #[serde(rename = "B")]
    pub item_b: PathBuf,

    pub choice: Choice,

    pub metadata: TaskMetadata,
}

impl Record {
    /// Snapshot `task` with the given decision.
    pub fn snapshot(task: &Task, choice: Choice, recorded_at: DateTime<Local>) -> Self {
        Self {
            recorded_at,
            item_a: task.item_a.clone(),
            item_b: task.item_b.clone(),
            choice,
            metadata: task.metadata.clone(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.metadata.pair_id
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// RFC 3339, or a naive `YYYY-mm-ddTHH:MM:SS[.ffffff]` in local time.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Local>, String> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Local));
    }
    let naive = raw
        .parse::<NaiveDateTime>()
        .map_err(|e| format!("Invalid timestamp {:?}: {}", raw, e))?;
    // Ambiguous wall-clock times (DST fold) resolve to the earlier instant.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("Timestamp {:?} does not exist in the local time zone", raw))
}
