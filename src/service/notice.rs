//! User-facing outcome messages

use std::fmt;

use serde::Serialize;

use super::tracker::{Cleared, Toggle, TrackerError};
use crate::domain::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Warnings and errors go to stderr
    pub fn is_problem(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short message describing what a mutation did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn subject_added(name: &str) -> Self {
        Self::success(format!("Category \"{}\" added successfully", name))
    }

    pub fn task_added() -> Self {
        Self::success("Task added successfully")
    }

    pub fn task_updated() -> Self {
        Self::success("Task updated successfully")
    }

    pub fn toggled(toggle: Toggle) -> Self {
        match toggle {
            Toggle::Completed => Self::success("Task completed! Great job!"),
            Toggle::Reopened => Self::info("Task marked as pending"),
        }
    }

    pub fn task_deleted() -> Self {
        Self::info("Task deleted successfully")
    }

    pub fn completed_cleared(cleared: Cleared) -> Self {
        match cleared {
            Cleared::Nothing => Self::info("No completed tasks to clear"),
            Cleared::Removed(n) => Self::success(format!("Cleared {} completed tasks", n)),
        }
    }

    pub fn categories_cleared(cleared: Cleared) -> Self {
        match cleared {
            Cleared::Nothing => Self::info("No categories to clear"),
            Cleared::Removed(_) => Self::success("All categories and tasks cleared"),
        }
    }

    pub fn exported() -> Self {
        Self::success("Tasks exported successfully")
    }

    pub fn imported() -> Self {
        Self::success("Tasks imported successfully")
    }

    pub fn import_failed() -> Self {
        Self::error("Error importing file. Please check the file format.")
    }

    pub fn reset() -> Self {
        Self::info("App reset to initial state")
    }

    /// Startup reminder; `None` when nothing is overdue
    pub fn overdue_reminder(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::warning("You have 1 overdue task!")),
            n => Some(Self::warning(format!("You have {} overdue tasks!", n))),
        }
    }

    /// Maps a failed mutation to what the user should see
    pub fn from_error(err: &TrackerError) -> Self {
        match err {
            TrackerError::Validation(ValidationError::DuplicateSubject(_)) => {
                Self::warning("Category with this name already exists")
            }
            TrackerError::Validation(ValidationError::MissingField(_)) => {
                Self::warning("Please fill all required fields")
            }
            TrackerError::Validation(e) => Self::warning(e.to_string()),
            TrackerError::Storage(e) => Self::error(e.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
