//! Aggregate statistics for the dashboard

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::calendar::{day_offset_label, days_until, is_overdue, is_today};
use crate::domain::{Task, TaskId};

/// How far ahead the deadline list looks, inclusive
pub const DEADLINE_WINDOW_DAYS: u64 = 7;

/// How many upcoming deadlines are listed
pub const DEADLINE_LIMIT: usize = 3;

/// Rounded percentage with halves rounded up; 0 when `total` is 0
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}

/// Progress on tasks due today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodayProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// A pending task due within the deadline window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deadline {
    pub task_id: TaskId,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_left: i64,
    pub label: String,
}

/// Dashboard numbers derived from the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Pending tasks due today or later
    pub upcoming: usize,
    /// Pending tasks due before today
    pub overdue: usize,
    pub productivity: u32,
    pub today: TodayProgress,
    pub deadlines: Vec<Deadline>,
}

impl Stats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let pending = total - completed;

        let upcoming = tasks
            .iter()
            .filter(|t| !t.completed && t.due_date >= today)
            .count();
        let overdue = tasks
            .iter()
            .filter(|t| !t.completed && is_overdue(t.due_date, today))
            .count();

        Self {
            total,
            completed,
            pending,
            upcoming,
            overdue,
            productivity: percentage(completed, total),
            today: today_progress(tasks, today),
            deadlines: upcoming_deadlines(tasks, today),
        }
    }
}

pub fn today_progress(tasks: &[Task], today: NaiveDate) -> TodayProgress {
    let due_today: Vec<_> = tasks
        .iter()
        .filter(|t| is_today(t.due_date, today))
        .collect();
    let completed = due_today.iter().filter(|t| t.completed).count();

    TodayProgress {
        completed,
        total: due_today.len(),
        percent: percentage(completed, due_today.len()),
    }
}

/// Pending tasks due between today and a week out, soonest first, at most three
pub fn upcoming_deadlines(tasks: &[Task], today: NaiveDate) -> Vec<Deadline> {
    let horizon = today
        .checked_add_days(Days::new(DEADLINE_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.completed && t.due_date >= today && t.due_date <= horizon)
        .collect();
    upcoming.sort_by_key(|t| t.due_date);

    upcoming
        .into_iter()
        .take(DEADLINE_LIMIT)
        .map(|t| {
            let days_left = days_until(t.due_date, today);
            Deadline {
                task_id: t.id,
                title: t.title.clone(),
                due_date: t.due_date,
                days_left,
                label: day_offset_label(days_left),
            }
        })
        .collect()
}
