//! Task: one generated comparison unit.

use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Descriptive fields attached to a task and echoed verbatim into records.
///
/// Only `pair_id` is required when reading a document back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMetadata {
    /// Task id; also the key records are matched on when a document is reloaded
    pub pair_id: TaskId,

    /// Group item A was drawn from; empty when a loaded record lacks it
    #[serde(rename = "A_dir", default, skip_serializing_if = "String::is_empty")]
    pub a_group: String,

    /// Group item B was drawn from; empty when a loaded record lacks it
    #[serde(rename = "B_dir", default, skip_serializing_if = "String::is_empty")]
    pub b_group: String,

    /// Any further fields, kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A pair of media items to compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub item_a: PathBuf,
    pub item_b: PathBuf,
    pub metadata: TaskMetadata,
}

impl Task {
    pub fn new(id: TaskId, item_a: PathBuf, item_b: PathBuf, a_group: &Path, b_group: &Path) -> Self {
        Self {
            id,
            item_a,
            item_b,
            metadata: TaskMetadata {
                pair_id: id,
                a_group: a_group.to_string_lossy().into_owned(),
                b_group: b_group.to_string_lossy().into_owned(),
                extra: BTreeMap::new(),
            },
        }
    }
}
