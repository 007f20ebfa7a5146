//! Task filters and the view selector
//!
//! A [`View`] applies exactly one rule: a status bucket, a category, or a
//! text search. Search and status are never combined.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::calendar::{is_overdue, is_today};
use crate::domain::{Board, SubjectId, Task};

/// Status bucket for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Today,
    Overdue,
}

impl StatusFilter {
    /// Returns true if the task belongs in this bucket
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
            StatusFilter::Today => is_today(task.due_date, today) && !task.completed,
            StatusFilter::Overdue => is_overdue(task.due_date, today) && !task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
            StatusFilter::Today => "today",
            StatusFilter::Overdue => "overdue",
        }
    }

    /// List heading
    pub fn title(self) -> &'static str {
        match self {
            StatusFilter::All => "All Tasks",
            StatusFilter::Pending => "Pending Tasks",
            StatusFilter::Completed => "Completed Tasks",
            StatusFilter::Today => "Today's Tasks",
            StatusFilter::Overdue => "Overdue Tasks",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            StatusFilter::All => "No tasks added yet. Add your first task with 'task add'!",
            StatusFilter::Pending => "No pending tasks. Great job!",
            StatusFilter::Completed => {
                "No completed tasks yet. Complete some tasks to see them here!"
            }
            StatusFilter::Today => {
                "No tasks due today. Check upcoming deadlines for future tasks."
            }
            StatusFilter::Overdue => "No overdue tasks. Excellent!",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" | "done" => Ok(StatusFilter::Completed),
            "today" => Ok(StatusFilter::Today),
            "overdue" => Ok(StatusFilter::Overdue),
            other => Err(format!(
                "unknown filter '{}': expected all, pending, completed, today or overdue",
                other
            )),
        }
    }
}

pub fn filter_by_status<'a>(
    tasks: &'a [Task],
    status: StatusFilter,
    today: NaiveDate,
) -> Vec<&'a Task> {
    tasks.iter().filter(|t| status.matches(t, today)).collect()
}

pub fn filter_by_category(tasks: &[Task], subject_id: SubjectId) -> Vec<&Task> {
    tasks.iter().filter(|t| t.subject_id == subject_id).collect()
}

/// Case-insensitive substring match on title or description
pub fn filter_by_search<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Which slice of the board the task list shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Status(StatusFilter),
    Category(SubjectId),
    Search(String),
}

impl Default for View {
    fn default() -> Self {
        View::Status(StatusFilter::All)
    }
}

impl View {
    /// Builds a search view; a blank query falls back to all tasks
    pub fn search(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            View::default()
        } else {
            View::Search(query.to_string())
        }
    }

    /// Applies this view's single rule, keeping board order
    pub fn select<'a>(&self, board: &'a Board, today: NaiveDate) -> Vec<&'a Task> {
        match self {
            View::Status(status) => filter_by_status(&board.tasks, *status, today),
            View::Category(id) => filter_by_category(&board.tasks, *id),
            View::Search(query) => filter_by_search(&board.tasks, query),
        }
    }

    /// List heading
    pub fn title(&self, board: &Board) -> String {
        match self {
            View::Status(status) => status.title().to_string(),
            View::Category(id) => format!("Category: {}", board.subject_name(*id)),
            View::Search(query) => format!("Search: \"{}\"", query),
        }
    }

    /// Hint shown when the view selects nothing
    pub fn empty_message(&self, board: &Board) -> String {
        match self {
            View::Status(status) => status.empty_message().to_string(),
            View::Search(query) => format!("No tasks found for \"{}\"", query),
            View::Category(id) => format!("No tasks in \"{}\"", board.subject_name(*id)),
        }
    }
}
