//! First-run sample data

use chrono::{Days, NaiveDate};

use crate::domain::{Board, Priority, Subject, SubjectId, Task, TaskId};

/// Demonstration board: four subjects and five tasks, three due today (one
/// of them done) and one due in three days
pub fn seed_defaults(today: NaiveDate) -> Board {
    let in_three_days = today.checked_add_days(Days::new(3)).unwrap_or(today);

    let subjects = vec![
        Subject::new(SubjectId::new(1), "Work"),
        Subject::new(SubjectId::new(2), "Personal"),
        Subject::new(SubjectId::new(3), "Study"),
        Subject::new(SubjectId::new(4), "Health"),
    ];

    let tasks = vec![
        Task::new(TaskId::new(1), "Finish Project Report", SubjectId::new(1), today)
            .with_description("Complete the quarterly project report and submit to manager")
            .with_priority(Priority::High),
        Task::new(TaskId::new(2), "Gym Session", SubjectId::new(4), today)
            .with_description("Morning workout at the gym")
            .with_priority(Priority::Medium),
        Task::new(TaskId::new(3), "Read Book Chapter", SubjectId::new(3), today)
            .with_description("Read chapter 5 of Rust Design Patterns")
            .with_priority(Priority::High)
            .with_completed(true),
        Task::new(TaskId::new(4), "Team Meeting", SubjectId::new(1), today)
            .with_description("Weekly team sync meeting")
            .with_priority(Priority::Medium),
        Task::new(TaskId::new(5), "Grocery Shopping", SubjectId::new(2), in_three_days)
            .with_description("Buy groceries for the week")
            .with_priority(Priority::Low),
    ];

    Board::new(subjects, tasks)
}
