//! Preference Store
//!
//! Keyed log of rater decisions backed by a single JSON document. At most one
//! record per task id: a repeated decision replaces the earlier record in
//! place. Every mutation rewrites the document before returning.

pub mod persistence;
pub mod record;

pub use record::Record;

use crate::error::{LoadError, StorageError};
use crate::generator::Task;
use crate::types::{Choice, TaskId};
use chrono::{DateTime, Local};
use persistence::DocumentLoad;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Records for one session, in insertion order.
pub struct PreferenceStore {
    location: PathBuf,
    records: Vec<Record>,
    /// task id -> position in `records`
    positions: HashMap<TaskId, usize>,
    load_error: Option<LoadError>,
}

impl PreferenceStore {
    /// Open the store backed by `location`.
    ///
    /// A missing document gives an empty store. A malformed one also gives an
    /// empty store; the parse failure is logged and kept in [`load_error`].
    ///
    /// [`load_error`]: PreferenceStore::load_error
    pub fn open(location: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let location = location.into();
        let mut store = Self {
            location,
            records: Vec::new(),
            positions: HashMap::new(),
            load_error: None,
        };

        match persistence::load_document(&store.location)? {
            DocumentLoad::Missing => {
                tracing::debug!("No preference document at {}", store.location.display());
            }
            DocumentLoad::Loaded(records) => {
                for record in records {
                    store.upsert(record);
                }
                tracing::info!(
                    "Loaded {} records from {}",
                    store.records.len(),
                    store.location.display()
                );
            }
            DocumentLoad::Malformed(err) => {
                tracing::warn!("{}. Starting with empty preferences.", err);
                store.load_error = Some(err);
            }
        }

        Ok(store)
    }

    /// Record `choice` for `task`, stamped with the current local time.
    pub fn record_choice(&mut self, task: &Task, choice: Choice) -> Result<(), StorageError> {
        self.record_choice_at(task, choice, Local::now())
    }

    /// Record `choice` for `task` with an explicit timestamp.
    ///
    /// On a write failure the in-memory record is still updated.
    pub fn record_choice_at(
        &mut self,
        task: &Task,
        choice: Choice,
        recorded_at: DateTime<Local>,
    ) -> Result<(), StorageError> {
        let replaced = self.upsert(Record::snapshot(task, choice, recorded_at));
        tracing::debug!(task_id = task.id, %choice, replaced, "Recorded choice");
        self.persist()
    }

    pub fn lookup(&self, task_id: TaskId) -> Option<&Record> {
        self.positions.get(&task_id).map(|&i| &self.records[i])
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Parse failure hit by [`open`](PreferenceStore::open), if any.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// Take the parse failure out, leaving the store marked as clean.
    pub fn take_load_error(&mut self) -> Option<LoadError> {
        self.load_error.take()
    }

    /// Insert or replace in place. Returns true when a record was replaced.
    fn upsert(&mut self, record: Record) -> bool {
        match self.positions.get(&record.task_id()) {
            Some(&i) => {
                self.records[i] = record;
                true
            }
            None => {
                self.positions.insert(record.task_id(), self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        persistence::write_document(&self.location, &self.records).map_err(|e| {
            tracing::error!("{}", e);
            e
        })
    }
}
