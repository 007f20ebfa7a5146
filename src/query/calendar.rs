//! Calendar-day predicates
//!
//! Due dates have no time component, so every comparison here is a plain
//! day comparison against a caller-supplied `today`.

use chrono::NaiveDate;

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Strictly before today. A task due today is never overdue.
pub fn is_overdue(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Whole days from `today` to `date` (negative when in the past)
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Human label for a day offset: "Today", "Tomorrow" or "In N days"
pub fn day_offset_label(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("In {} days", n),
    }
}
