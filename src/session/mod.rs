//! Rating Session
//!
//! Walks a rater through the generated tasks. Each input event runs one
//! complete read-modify-persist cycle and returns the view to render next.

pub mod naming;
pub mod state;

pub use naming::session_document_path;
pub use state::{CompletionView, PairView, SessionEvent, SessionState, SessionView};

use crate::error::{ApiError, StorageError};
use crate::generator::Task;
use crate::store::PreferenceStore;
use chrono::Local;
use std::path::PathBuf;

/// Where new session documents go.
#[derive(Debug, Clone)]
pub struct DocumentNaming {
    pub dir: PathBuf,
    pub prefix: String,
}

impl DocumentNaming {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    fn open_new_store(&self) -> Result<PreferenceStore, StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = session_document_path(&self.dir, &self.prefix, Local::now());
        tracing::info!("Starting session document {}", path.display());
        PreferenceStore::open(path)
    }
}

pub struct RatingSession {
    tasks: Vec<Task>,
    store: PreferenceStore,
    state: SessionState,
    naming: DocumentNaming,
}

impl RatingSession {
    /// Start a session on a new, empty document.
    pub fn start(tasks: Vec<Task>, naming: DocumentNaming) -> Result<Self, ApiError> {
        let store = naming.open_new_store()?;
        Ok(Self::resume(tasks, store, naming))
    }

    /// Continue rating against an already opened store.
    pub fn resume(tasks: Vec<Task>, store: PreferenceStore, naming: DocumentNaming) -> Self {
        let mut session = Self {
            tasks,
            store,
            state: SessionState::default(),
            naming,
        };
        session.move_to(0);
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_complete(&self) -> bool {
        self.state.cursor >= self.tasks.len()
    }

    pub fn view(&self) -> SessionView {
        match self.tasks.get(self.state.cursor) {
            Some(task) => SessionView::Pair(PairView {
                position: self.state.cursor,
                total: self.tasks.len(),
                task: task.clone(),
                selection: self.state.selection,
                progress: (self.state.cursor + 1) as f64 / self.tasks.len() as f64,
                can_go_back: self.state.cursor > 0,
                can_advance: self.state.selection.is_some(),
                needs_selection: false,
            }),
            None => SessionView::Complete(CompletionView {
                records: self.store.all().to_vec(),
                document: self.store.location().to_path_buf(),
            }),
        }
    }

    /// Apply one rater event.
    ///
    /// A failed write is returned as an error; the selection and the in-memory
    /// record still reflect the choice, so the caller may simply retry.
    pub fn handle(&mut self, event: SessionEvent) -> Result<SessionView, ApiError> {
        if self.is_complete() && event != SessionEvent::NewRound {
            tracing::debug!(?event, "Ignoring event on completed session");
            return Ok(self.view());
        }

        let mut needs_selection = false;
        match event {
            SessionEvent::Choose(choice) => {
                let task = &self.tasks[self.state.cursor];
                self.state.selection = Some(choice);
                self.store.record_choice(task, choice)?;
            }
            SessionEvent::Previous => {
                if self.state.cursor > 0 {
                    self.move_to(self.state.cursor - 1);
                }
            }
            SessionEvent::Next => {
                if self.state.selection.is_some() {
                    self.move_to(self.state.cursor + 1);
                } else {
                    needs_selection = true;
                }
            }
            SessionEvent::NewRound => {
                self.store = self.naming.open_new_store()?;
                self.move_to(0);
            }
        }

        let mut view = self.view();
        if let SessionView::Pair(pair) = &mut view {
            pair.needs_selection = needs_selection;
        }
        Ok(view)
    }

    /// Land on `cursor`, restoring any earlier decision for that task.
    fn move_to(&mut self, cursor: usize) {
        self.state.cursor = cursor;
        self.state.selection = self
            .tasks
            .get(cursor)
            .and_then(|task| self.store.lookup(task.id))
            .map(|record| record.choice);
    }
}
