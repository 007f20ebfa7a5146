//! Display ordering for task lists

use std::borrow::Borrow;

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::{is_overdue, is_today};
use crate::domain::Task;

/// Sorts tasks for display: overdue pending tasks first, then by due date,
/// then by priority (high before low). The sort is stable, so tasks equal on
/// all three keys keep their original order.
pub fn sort_for_display<T: Borrow<Task>>(tasks: &mut [T], today: NaiveDate) {
    tasks.sort_by_key(|t| {
        let task = t.borrow();
        let overdue = is_overdue(task.due_date, today) && !task.completed;
        (!overdue, task.due_date, task.priority.rank())
    });
}

/// Due-date badge for a pending task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueLabel {
    Overdue,
    Today,
    Upcoming,
}

impl DueLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            DueLabel::Overdue => "Overdue",
            DueLabel::Today => "Today",
            DueLabel::Upcoming => "Upcoming",
        }
    }
}

/// Badge for a task's due date; completed tasks get none
pub fn due_label(task: &Task, today: NaiveDate) -> Option<DueLabel> {
    if task.completed {
        None
    } else if is_overdue(task.due_date, today) {
        Some(DueLabel::Overdue)
    } else if is_today(task.due_date, today) {
        Some(DueLabel::Today)
    } else {
        Some(DueLabel::Upcoming)
    }
}
