//! Subject (category) CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::app::{report, today};
use super::confirm::confirm;
use super::output::Output;
use crate::service::{Cleared, Notice};
use crate::storage::Workspace;

#[derive(Subcommand)]
pub enum SubjectCommands {
    /// Add a category
    Add {
        /// Category name (must be unique, ignoring case)
        name: String,
    },

    /// List categories with their task counts
    List,

    /// Delete every category and every task
    Clear {
        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

pub fn run(cmd: SubjectCommands, workspace: &Workspace, output: &Output) -> Result<()> {
    match cmd {
        SubjectCommands::Add { name } => add_subject(workspace, output, &name),
        SubjectCommands::List => list_subjects(workspace, output),
        SubjectCommands::Clear { yes } => clear_subjects(workspace, output, yes),
    }
}

fn add_subject(workspace: &Workspace, output: &Output, name: &str) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;
    let subject = tracker
        .create_subject(name)
        .map_err(|e| report(output, e))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": subject.id,
            "name": subject.name,
        }));
    } else {
        output.notify(&Notice::subject_added(&subject.name));
    }

    Ok(())
}

fn list_subjects(workspace: &Workspace, output: &Output) -> Result<()> {
    let tracker = workspace.tracker(today())?;
    let board = tracker.board();

    if output.is_json() {
        let items: Vec<_> = board
            .subjects
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "name": s.name,
                    "tasks": board.task_count_for(s.id),
                })
            })
            .collect();
        output.data(&items);
    } else if board.subjects.is_empty() {
        println!("No categories");
    } else {
        println!("{:<6} {:<6} NAME", "ID", "TASKS");
        println!("{}", "-".repeat(40));

        for subject in &board.subjects {
            println!(
                "{:<6} {:<6} {}",
                subject.id.to_string(),
                board.task_count_for(subject.id),
                subject.name
            );
        }
    }

    Ok(())
}

fn clear_subjects(workspace: &Workspace, output: &Output, yes: bool) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;

    if tracker.board().subjects.is_empty() {
        output.notify(&Notice::categories_cleared(Cleared::Nothing));
        return Ok(());
    }

    let question = "Are you sure you want to clear all categories? This will also remove all tasks.";
    if !confirm(question, yes)? {
        output.notify(&Notice::info("Cancelled"));
        return Ok(());
    }

    let cleared = tracker
        .clear_all_categories()
        .map_err(|e| report(output, e))?;
    output.notify(&Notice::categories_cleared(cleared));

    Ok(())
}
