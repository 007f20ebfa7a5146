//! Task CLI commands

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Subcommand;

use super::app::{report, today};
use super::confirm::confirm;
use super::output::Output;
use crate::domain::{Board, NewTask, Priority, SubjectId, Task, TaskId, TaskPatch};
use crate::query::{due_label, sort_for_display, StatusFilter, View};
use crate::service::{Cleared, Notice};
use crate::storage::Workspace;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    ///
    /// Examples:
    ///   tasktracker task add "Write report" --subject 1
    ///   tasktracker task add "Gym" --subject Health --due tomorrow --priority low
    Add {
        /// Task title
        title: String,

        /// Category ID or name
        #[arg(long, short)]
        subject: String,

        /// Due date: YYYY-MM-DD, today or tomorrow (defaults to today)
        #[arg(long)]
        due: Option<String>,

        /// Priority: high, medium or low
        #[arg(long, short, default_value = "medium")]
        priority: Priority,

        /// Longer description
        #[arg(long, short, default_value = "")]
        description: String,
    },

    /// List tasks, sorted with overdue first
    List {
        /// Status filter: all, pending, completed, today, overdue
        #[arg(long, conflicts_with_all = ["subject", "search"])]
        status: Option<StatusFilter>,

        /// Only tasks in this category (ID or name)
        #[arg(long, conflicts_with = "search")]
        subject: Option<String>,

        /// Case-insensitive text search in title and description
        #[arg(long)]
        search: Option<String>,
    },

    /// Show task details
    Show {
        /// Task ID
        id: TaskId,
    },

    /// Change fields of a task
    Edit {
        /// Task ID
        id: TaskId,

        #[arg(long)]
        title: Option<String>,

        /// Category ID or name
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Due date: YYYY-MM-DD, today or tomorrow
        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        priority: Option<Priority>,

        #[arg(long)]
        completed: Option<bool>,
    },

    /// Mark a task done, or pending again
    Toggle {
        /// Task ID
        id: TaskId,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete every completed task
    ClearCompleted {
        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

pub fn run(cmd: TaskCommands, workspace: &Workspace, output: &Output) -> Result<()> {
    match cmd {
        TaskCommands::Add {
            title,
            subject,
            due,
            priority,
            description,
        } => add_task(
            workspace,
            output,
            NewTaskArgs {
                title,
                subject,
                due,
                priority,
                description,
            },
        ),
        TaskCommands::List {
            status,
            subject,
            search,
        } => list_tasks(workspace, output, status, subject.as_deref(), search.as_deref()),
        TaskCommands::Show { id } => show_task(workspace, output, id),
        TaskCommands::Edit {
            id,
            title,
            subject,
            description,
            due,
            priority,
            completed,
        } => {
            let edit = EditArgs {
                title,
                subject,
                description,
                due,
                priority,
                completed,
            };
            edit_task(workspace, output, id, edit)
        }
        TaskCommands::Toggle { id } => toggle_task(workspace, output, id),
        TaskCommands::Delete { id, yes } => delete_task(workspace, output, id, yes),
        TaskCommands::ClearCompleted { yes } => clear_completed(workspace, output, yes),
    }
}

struct NewTaskArgs {
    title: String,
    subject: String,
    due: Option<String>,
    priority: Priority,
    description: String,
}

struct EditArgs {
    title: Option<String>,
    subject: Option<String>,
    description: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    completed: Option<bool>,
}

/// Parses a due date relative to `today`
fn parse_due(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    match raw.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .context("Date out of range"),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .with_context(|| format!("Invalid due date '{}': expected YYYY-MM-DD", raw)),
    }
}

/// Resolves a category given by ID or by name
///
/// A numeric ID is taken as is, even if no such category exists.
fn resolve_subject(board: &Board, raw: &str) -> Result<SubjectId> {
    if let Ok(id) = raw.parse::<SubjectId>() {
        return Ok(id);
    }
    board
        .subject_named(raw.trim())
        .map(|s| s.id)
        .ok_or_else(|| anyhow::anyhow!("Category not found: {}", raw))
}

fn task_json(task: &Task, board: &Board, today: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "id": task.id,
        "title": task.title,
        "subjectId": task.subject_id,
        "category": board.subject_name(task.subject_id),
        "description": task.description,
        "dueDate": task.due_date,
        "priority": task.priority,
        "completed": task.completed,
        "label": due_label(task, today),
    })
}

fn status_text(task: &Task, today: NaiveDate) -> &'static str {
    match due_label(task, today) {
        Some(label) => label.as_str(),
        None => "Done",
    }
}

fn add_task(workspace: &Workspace, output: &Output, args: NewTaskArgs) -> Result<()> {
    let today = today();
    let mut tracker = workspace.tracker(today)?;

    let subject_id = resolve_subject(tracker.board(), &args.subject)?;
    let due_date = match args.due.as_deref() {
        Some(raw) => parse_due(raw, today)?,
        None => today,
    };

    let input = NewTask {
        title: args.title,
        subject_id: Some(subject_id),
        description: args.description,
        due_date: Some(due_date),
        priority: args.priority,
    };
    let task = tracker.create_task(input).map_err(|e| report(output, e))?;

    if output.is_json() {
        output.data(&task_json(&task, tracker.board(), today));
    } else {
        output.notify(&Notice::task_added());
        println!("{} {}", task.id, task.title);
    }

    Ok(())
}

fn list_tasks(
    workspace: &Workspace,
    output: &Output,
    status: Option<StatusFilter>,
    subject: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let today = today();
    let tracker = workspace.tracker(today)?;
    let board = tracker.board();

    let view = match (search, subject) {
        (Some(query), _) => View::search(query),
        (None, Some(raw)) => View::Category(resolve_subject(board, raw)?),
        (None, None) => View::Status(status.unwrap_or_default()),
    };
    tracing::debug!(?view, "listing tasks");

    let mut tasks = view.select(board, today);
    sort_for_display(&mut tasks, today);

    if output.is_json() {
        let items: Vec<_> = tasks.iter().map(|t| task_json(t, board, today)).collect();
        output.data(&items);
    } else if tasks.is_empty() {
        println!("{}", view.title(board));
        println!("{}", view.empty_message(board));
    } else {
        println!("{} ({})", view.title(board), tasks.len());
        println!(
            "{:<6} {:<11} {:<7} {:<9} {:<14} TITLE",
            "ID", "DUE", "PRIO", "STATUS", "CATEGORY"
        );
        println!("{}", "-".repeat(72));

        for task in tasks {
            println!(
                "{:<6} {:<11} {:<7} {:<9} {:<14} {}",
                task.id.to_string(),
                task.due_date.to_string(),
                task.priority.as_str(),
                status_text(task, today),
                board.subject_name(task.subject_id),
                task.title
            );
        }
    }

    Ok(())
}

fn show_task(workspace: &Workspace, output: &Output, id: TaskId) -> Result<()> {
    let today = today();
    let tracker = workspace.tracker(today)?;
    let board = tracker.board();

    let task = board
        .task(id)
        .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;

    if output.is_json() {
        output.data(&task_json(task, board, today));
    } else {
        println!("Task: {}", task.id);
        println!("Title: {}", task.title);
        println!("Category: {}", board.subject_name(task.subject_id));
        println!("Due: {}", task.due_date);
        println!("Priority: {}", task.priority.label());
        println!("Status: {}", status_text(task, today));
        if !task.description.is_empty() {
            output.blank();
            println!("{}", task.description);
        }
    }

    Ok(())
}

fn edit_task(workspace: &Workspace, output: &Output, id: TaskId, args: EditArgs) -> Result<()> {
    let today = today();
    let mut tracker = workspace.tracker(today)?;

    let subject_id = args
        .subject
        .as_deref()
        .map(|raw| resolve_subject(tracker.board(), raw))
        .transpose()?;
    let due_date = args
        .due
        .as_deref()
        .map(|raw| parse_due(raw, today))
        .transpose()?;

    let patch = TaskPatch {
        title: args.title,
        subject_id,
        description: args.description,
        due_date,
        priority: args.priority,
        completed: args.completed,
    };

    match tracker.update_task(id, patch).map_err(|e| report(output, e))? {
        Some(task) if output.is_json() => output.data(&task_json(&task, tracker.board(), today)),
        Some(_) => output.notify(&Notice::task_updated()),
        None => output.notify(&not_found(id)),
    }

    Ok(())
}

fn toggle_task(workspace: &Workspace, output: &Output, id: TaskId) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;

    match tracker.toggle_completion(id).map_err(|e| report(output, e))? {
        Some(toggle) => output.notify(&Notice::toggled(toggle)),
        None => output.notify(&not_found(id)),
    }

    Ok(())
}

fn delete_task(workspace: &Workspace, output: &Output, id: TaskId, yes: bool) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;

    if tracker.board().task(id).is_none() {
        output.notify(&not_found(id));
        return Ok(());
    }

    if !confirm("Are you sure you want to delete this task?", yes)? {
        output.notify(&Notice::info("Cancelled"));
        return Ok(());
    }

    if tracker.delete_task(id).map_err(|e| report(output, e))? {
        output.notify(&Notice::task_deleted());
    }

    Ok(())
}

fn clear_completed(workspace: &Workspace, output: &Output, yes: bool) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;

    let count = tracker.board().tasks.iter().filter(|t| t.completed).count();
    if count == 0 {
        output.notify(&Notice::completed_cleared(Cleared::Nothing));
        return Ok(());
    }

    let question = format!(
        "Are you sure you want to clear all {} completed tasks?",
        count
    );
    if !confirm(&question, yes)? {
        output.notify(&Notice::info("Cancelled"));
        return Ok(());
    }

    let cleared = tracker.clear_completed().map_err(|e| report(output, e))?;
    output.notify(&Notice::completed_cleared(cleared));

    Ok(())
}

fn not_found(id: TaskId) -> Notice {
    Notice::info(format!("Task not found: {}", id))
}
