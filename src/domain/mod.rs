//! Domain models for the task tracker
//!
//! Contains the data model without any I/O concerns.

mod id;
mod subject;
mod task;
mod board;

pub use id::{next_id, IdError, Identified, SubjectId, TaskId};
pub use subject::Subject;
pub use task::{NewTask, Priority, Task, TaskPatch};
pub use board::{validate_patch, Board, ValidationError};
