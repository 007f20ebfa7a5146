//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{dashboard, subject, task, transfer};
use crate::service::{Notice, TrackerError};
use crate::storage::{Config, Theme, Workspace};

#[derive(Parser)]
#[command(name = "tasktracker")]
#[command(author, version, about = "Track tasks by category, due date and priority")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory holding the tracker files
    #[arg(long, global = true, env = "TASKTRACKER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a tracker in the given directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Manage categories
    #[command(subcommand, visible_alias = "category")]
    Subject(subject::SubjectCommands),

    /// Manage tasks
    #[command(subcommand)]
    Task(task::TaskCommands),

    /// Show counts, productivity and upcoming deadlines
    Stats,

    /// Write a JSON backup of all subjects and tasks
    Export {
        /// Output file ("-" for stdout); defaults to a dated file name
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Replace all subjects and tasks with a backup
    Import {
        /// Backup file to read
        file: PathBuf,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete all subjects and tasks
    Reset {
        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Show or set the colour theme
    Theme {
        /// New theme (light or dark)
        theme: Option<Theme>,
    },
}

/// A failure already shown to the user as a notice
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Reported(pub String);

/// Shows a failed mutation as a notice and turns it into an exit failure
pub(super) fn report(output: &Output, err: TrackerError) -> anyhow::Error {
    let notice = Notice::from_error(&err);
    output.notify(&notice);
    Reported(notice.message).into()
}

/// The local calendar day
pub(super) fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format);

    tracing::debug!("tasktracker starting");

    if let Commands::Init { path } = &cli.command {
        let dir = Workspace::init(Path::new(path))?;
        tracing::debug!(dir = %dir.display(), "created tracker directory");
        if output.is_json() {
            output.data(&serde_json::json!({
                "success": true,
                "dir": dir.display().to_string(),
            }));
        } else {
            output.success(&format!("Initialized tracker at {}", dir.display()));
        }
        return Ok(());
    }

    let workspace = Workspace::resolve(cli.data_dir.as_deref(), config)?;

    match cli.command {
        Commands::Init { .. } => {}
        Commands::Subject(cmd) => subject::run(cmd, &workspace, &output)?,
        Commands::Task(cmd) => task::run(cmd, &workspace, &output)?,
        Commands::Stats => dashboard::stats(&workspace, &output)?,
        Commands::Export { output: path } => transfer::export(&workspace, &output, path.as_deref())?,
        Commands::Import { file, yes } => transfer::import(&workspace, &output, &file, yes)?,
        Commands::Reset { yes } => transfer::reset(&workspace, &output, yes)?,
        Commands::Theme { theme } => transfer::theme(&workspace, &output, theme)?,
    }

    tracing::debug!("command completed successfully");
    Ok(())
}
