//! The tracker: owns the board and persists after every mutation

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::{validate_patch, Board, NewTask, Subject, Task, TaskId, TaskPatch, ValidationError};
use crate::storage::{
    seed_defaults, ExportDocument, Gateway, ImportDocument, KeyValueStore, StorageError, Theme,
};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of flipping a task's completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Completed,
    Reopened,
}

/// Result of a bulk clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleared {
    Nothing,
    Removed(usize),
}

/// Mutation service over a board
///
/// A failed save leaves the in-memory change in place; the next successful
/// save writes it out.
#[derive(Debug)]
pub struct Tracker<S> {
    board: Board,
    theme: Theme,
    gateway: Gateway<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Loads the stored snapshot
    ///
    /// On a first run (nothing stored) with `seed` set, the sample board is
    /// installed and written out.
    pub fn open(gateway: Gateway<S>, today: NaiveDate, seed: bool) -> Result<Self, StorageError> {
        let snapshot = gateway.load()?;
        let mut tracker = Self {
            board: snapshot.board,
            theme: snapshot.theme,
            gateway,
        };

        if seed && snapshot.fresh && tracker.board.is_empty() {
            tracker.board = seed_defaults(today);
            tracing::info!(
                subjects = tracker.board.subjects.len(),
                tasks = tracker.board.tasks.len(),
                "seeded sample data"
            );
            tracker.persist()?;
        }

        Ok(tracker)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        self.gateway.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.gateway.store_mut()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.gateway.save(&self.board, self.theme)
    }

    /// Adds a subject with a trimmed, case-insensitively unique name
    pub fn create_subject(&mut self, name: &str) -> Result<Subject, TrackerError> {
        let name = self.board.validate_subject_name(name)?;
        let subject = Subject::new(self.board.next_subject_id()?, name);
        self.board.subjects.push(subject.clone());
        tracing::debug!(id = %subject.id, name = %subject.name, "created subject");

        self.persist()?;
        Ok(subject)
    }

    /// Adds a pending task; the subject is not checked for existence
    pub fn create_task(&mut self, input: NewTask) -> Result<Task, TrackerError> {
        let task = self.board.build_task(input)?;
        self.board.tasks.push(task.clone());
        tracing::debug!(id = %task.id, title = %task.title, "created task");

        self.persist()?;
        Ok(task)
    }

    /// Merges a patch into a task
    ///
    /// Returns `Ok(None)` without writing when no task has the ID.
    pub fn update_task(
        &mut self,
        id: TaskId,
        mut patch: TaskPatch,
    ) -> Result<Option<Task>, TrackerError> {
        validate_patch(&mut patch)?;
        let Some(task) = self.board.task_mut(id) else {
            return Ok(None);
        };
        task.apply(patch);
        let updated = task.clone();
        tracing::debug!(%id, "updated task");

        self.persist()?;
        Ok(Some(updated))
    }

    /// Flips a task between pending and completed
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<Option<Toggle>, TrackerError> {
        let Some(task) = self.board.task_mut(id) else {
            return Ok(None);
        };
        let toggle = if task.toggle() {
            Toggle::Completed
        } else {
            Toggle::Reopened
        };
        tracing::debug!(%id, ?toggle, "toggled task");

        self.persist()?;
        Ok(Some(toggle))
    }

    /// Removes a task; returns false when no task has the ID
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool, TrackerError> {
        let before = self.board.tasks.len();
        self.board.tasks.retain(|t| t.id != id);
        if self.board.tasks.len() == before {
            return Ok(false);
        }
        tracing::debug!(%id, "deleted task");

        self.persist()?;
        Ok(true)
    }

    /// Removes every completed task
    pub fn clear_completed(&mut self) -> Result<Cleared, TrackerError> {
        let before = self.board.tasks.len();
        self.board.tasks.retain(|t| !t.completed);
        let removed = before - self.board.tasks.len();
        if removed == 0 {
            return Ok(Cleared::Nothing);
        }
        tracing::debug!(removed, "cleared completed tasks");

        self.persist()?;
        Ok(Cleared::Removed(removed))
    }

    /// Removes every subject and every task
    ///
    /// The count in [`Cleared::Removed`] is the number of subjects removed.
    pub fn clear_all_categories(&mut self) -> Result<Cleared, TrackerError> {
        if self.board.subjects.is_empty() {
            return Ok(Cleared::Nothing);
        }
        let removed = self.board.subjects.len();
        self.board.subjects.clear();
        self.board.tasks.clear();
        tracing::debug!(removed, "cleared all categories");

        self.persist()?;
        Ok(Cleared::Removed(removed))
    }

    /// Empties both collections; sample data is not reinstalled
    pub fn reset_all(&mut self) -> Result<(), TrackerError> {
        self.board = Board::default();
        tracing::debug!("reset all data");

        self.persist()?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), TrackerError> {
        self.theme = theme;
        self.persist()?;
        Ok(())
    }

    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument::new(&self.board, now)
    }

    /// Replaces both collections with the document's
    pub fn import(&mut self, document: ImportDocument) -> Result<(), TrackerError> {
        self.board = document.into_board();
        tracing::info!(
            subjects = self.board.subjects.len(),
            tasks = self.board.tasks.len(),
            "imported data"
        );

        self.persist()?;
        Ok(())
    }
}
