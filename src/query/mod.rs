//! # Query Engine
//!
//! Pure functions computing derived views over a [`Board`](crate::domain::Board).
//! Nothing here mutates or persists; every call returns a fresh result.
//!
//! All functions take `today` explicitly. The CLI passes the local calendar
//! day, tests pin it.
//!
//! | Concern | Entry points |
//! |---------|--------------|
//! | Calendar | [`is_today`], [`is_overdue`], [`day_offset_label`] |
//! | Filtering | [`View`], [`StatusFilter`], [`filter_by_search`] |
//! | Ordering | [`sort_for_display`], [`due_label`] |
//! | Statistics | [`Stats`], [`today_progress`], [`upcoming_deadlines`] |

mod calendar;
mod filter;
mod sort;
mod stats;

pub use calendar::{day_offset_label, days_until, is_overdue, is_today};
pub use filter::{filter_by_category, filter_by_search, filter_by_status, StatusFilter, View};
pub use sort::{due_label, sort_for_display, DueLabel};
pub use stats::{
    percentage, today_progress, upcoming_deadlines, Deadline, Stats, TodayProgress,
    DEADLINE_LIMIT, DEADLINE_WINDOW_DAYS,
};
