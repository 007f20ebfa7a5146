//! Backup, restore, reset and theme commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use super::app::{report, today, Reported};
use super::confirm::confirm;
use super::output::Output;
use crate::service::Notice;
use crate::storage::{ImportDocument, Theme, Workspace};

pub fn export(workspace: &Workspace, output: &Output, path: Option<&Path>) -> Result<()> {
    let tracker = workspace.tracker(today())?;
    let document = tracker.export(Utc::now());
    let json = document
        .to_json_pretty()
        .context("Failed to serialize export")?;

    if path == Some(Path::new("-")) {
        println!("{}", json);
        return Ok(());
    }

    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(document.file_name()));
    fs::write(&path, json).with_context(|| format!("Failed to write export: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote export");

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": true,
            "path": path.display().to_string(),
            "subjects": document.subjects.len(),
            "tasks": document.tasks.len(),
        }));
    } else {
        output.notify(&Notice::exported());
        println!("Wrote {}", path.display());
    }

    Ok(())
}

pub fn import(workspace: &Workspace, output: &Output, file: &Path, yes: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file: {}", file.display()))?;

    let document = match ImportDocument::parse(&text) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(file = %file.display(), error = %e, "rejected import");
            let notice = Notice::import_failed();
            output.notify(&notice);
            return Err(Reported(notice.message).into());
        }
    };

    let mut tracker = workspace.tracker(today())?;
    if !confirm("This will replace your current tasks. Are you sure?", yes)? {
        output.notify(&Notice::info("Cancelled"));
        return Ok(());
    }

    tracker.import(document).map_err(|e| report(output, e))?;
    output.notify(&Notice::imported());

    Ok(())
}

pub fn reset(workspace: &Workspace, output: &Output, yes: bool) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;

    if !confirm(
        "Are you sure you want to reset all data? This cannot be undone.",
        yes,
    )? {
        output.notify(&Notice::info("Cancelled"));
        return Ok(());
    }

    tracker.reset_all().map_err(|e| report(output, e))?;
    output.notify(&Notice::reset());

    Ok(())
}

pub fn theme(workspace: &Workspace, output: &Output, theme: Option<Theme>) -> Result<()> {
    let mut tracker = workspace.tracker(today())?;

    match theme {
        None => {
            if output.is_json() {
                output.data(&serde_json::json!({ "theme": tracker.theme() }));
            } else {
                println!("{}", tracker.theme());
            }
        }
        Some(theme) => {
            tracker.set_theme(theme).map_err(|e| report(output, e))?;
            output.success(&format!("Theme set to {}", theme));
        }
    }

    Ok(())
}
