//! The board: every subject and task of a tracker session
//!
//! Both collections keep insertion order, which is creation order unless an
//! import replaced them. Nothing here persists; see [`crate::service::Tracker`].

use thiserror::Error;

use super::id::{next_id, SubjectId, TaskId};
use super::subject::Subject;
use super::task::{NewTask, Task, TaskPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Category name must not be empty")]
    EmptySubjectName,

    #[error("Category with this name already exists: {0}")]
    DuplicateSubject(String),

    #[error("Please fill all required fields (missing {0})")]
    MissingField(&'static str),

    #[error("No free IDs left for new {0}")]
    IdSpaceExhausted(&'static str),
}

/// In-memory subjects and tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub subjects: Vec<Subject>,
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new(subjects: Vec<Subject>, tasks: Vec<Task>) -> Self {
        Self { subjects, tasks }
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.tasks.is_empty()
    }

    pub fn next_subject_id(&self) -> Result<SubjectId, ValidationError> {
        next_id(&self.subjects)
            .map(SubjectId::new)
            .ok_or(ValidationError::IdSpaceExhausted("categories"))
    }

    pub fn next_task_id(&self) -> Result<TaskId, ValidationError> {
        next_id(&self.tasks)
            .map(TaskId::new)
            .ok_or(ValidationError::IdSpaceExhausted("tasks"))
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a subject by name, ignoring case
    pub fn subject_named(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.has_name(name))
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Number of tasks filed under a subject
    pub fn task_count_for(&self, subject_id: SubjectId) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.subject_id == subject_id)
            .count()
    }

    /// Subject name for display, "Uncategorized" when the subject is gone
    pub fn subject_name(&self, id: SubjectId) -> &str {
        self.subject(id)
            .map(|s| s.name.as_str())
            .unwrap_or("Uncategorized")
    }

    /// Checks a proposed subject name and returns it trimmed
    pub fn validate_subject_name(&self, raw: &str) -> Result<String, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptySubjectName);
        }
        if self.subject_named(name).is_some() {
            return Err(ValidationError::DuplicateSubject(name.to_string()));
        }
        Ok(name.to_string())
    }

    /// Builds a task from creation input, assigning the next free ID
    pub fn build_task(&self, input: NewTask) -> Result<Task, ValidationError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        let subject_id = input
            .subject_id
            .ok_or(ValidationError::MissingField("category"))?;
        let due_date = input
            .due_date
            .ok_or(ValidationError::MissingField("due date"))?;

        Ok(Task::new(self.next_task_id()?, title, subject_id, due_date)
            .with_description(input.description.trim())
            .with_priority(input.priority))
    }
}

/// Checks a patch against the same required-field rule as creation
pub fn validate_patch(patch: &mut TaskPatch) -> Result<(), ValidationError> {
    if let Some(title) = patch.title.as_mut() {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        *title = trimmed.to_string();
    }
    if let Some(description) = patch.description.as_mut() {
        *description = description.trim().to_string();
    }
    Ok(())
}
