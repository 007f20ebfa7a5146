//! Task domain model
//!
//! Tasks are the units of work tracked by the board. Each one is filed under
//! a subject, carries a due date (calendar day, no time) and a priority.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::id::{Identified, SubjectId, TaskId};

/// Priority of a task
///
/// Declaration order is display order: high sorts before medium before low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high = 0, medium = 1, low = 2
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Badge text, e.g. "High Priority"
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            other => Err(format!(
                "unknown priority '{}': expected high, medium or low",
                other
            )),
        }
    }
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    pub title: String,

    /// Subject this task is filed under
    pub subject_id: SubjectId,

    /// Free text, empty when not given
    #[serde(default)]
    pub description: String,

    pub due_date: NaiveDate,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        subject_id: SubjectId,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subject_id,
            description: String::new(),
            due_date,
            priority: Priority::default(),
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Merges a patch: provided fields replace, the rest are kept
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(subject_id) = patch.subject_id {
            self.subject_id = subject_id;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    /// Flips the completion flag and returns the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

impl Identified for Task {
    fn raw_id(&self) -> u32 {
        self.id.get()
    }
}

/// Partial update for a task; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub subject_id: Option<SubjectId>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

/// Input for creating a task
///
/// Subject and due date are optional here so that a missing value can be
/// reported as a validation error instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub subject_id: Option<SubjectId>,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}
