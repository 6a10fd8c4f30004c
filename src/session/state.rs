//! Session state, input events and the views handed back to the front end.

use crate::generator::Task;
use crate::store::Record;
use crate::types::Choice;
use serde::Serialize;
use std::path::PathBuf;

/// Cursor and highlighted choice of a rating session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Index of the task on screen; equal to the task count once finished
    pub cursor: usize,
    pub selection: Option<Choice>,
}

/// Rater input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Choose(Choice),
    Previous,
    Next,
    /// Start over on a fresh document with the same tasks
    NewRound,
}

/// What the front end should render after an event.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
    Pair(PairView),
    Complete(CompletionView),
}

#[derive(Debug, Clone, Serialize)]
pub struct PairView {
    /// 0-based index of the task
    pub position: usize,
    pub total: usize,
    pub task: Task,
    pub selection: Option<Choice>,
    /// Fraction of tasks reached, counting the current one
    pub progress: f64,
    pub can_go_back: bool,
    pub can_advance: bool,
    /// Set when Next was requested without a selection
    pub needs_selection: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionView {
    pub records: Vec<Record>,
    pub document: PathBuf,
}
