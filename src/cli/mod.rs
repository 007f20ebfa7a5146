//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Tracker location | `init` |
//! | Subject | Categories | `subject add`, `subject list`, `subject clear` |
//! | Task | Work items | `task add`, `task list`, `task toggle` |
//! | Dashboard | Derived numbers | `stats` |
//! | Data | Backup and preferences | `export`, `import`, `reset`, `theme` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logging on stderr; `RUST_LOG` overrides:
//! ```bash
//! tasktracker --verbose task list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod confirm;
mod subject;
mod task;
mod dashboard;
mod transfer;

pub use app::{Cli, Commands, Reported, run};
pub use output::{Output, OutputFormat};
