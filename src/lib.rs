//! tasktracker - A single-user task tracker
//!
//! Tasks are filed under categories ("subjects"), carry a due date and a
//! priority, and are either pending or completed. State is kept in a small
//! directory of JSON files and reloaded by every command.

pub mod domain;
pub mod query;
pub mod service;
pub mod storage;
pub mod cli;

pub use domain::{Board, Priority, Subject, SubjectId, Task, TaskId};
pub use service::{Notice, Tracker, TrackerError};
