//! # Storage Layer
//!
//! Persistence for the tracker through a small key-value interface.
//!
//! ## Storage Formats
//!
//! | Data | Format | Key |
//! |------|--------|-----|
//! | Subjects | JSON array | `subjects.json` |
//! | Tasks | JSON array (camelCase) | `tasks.json` |
//! | Theme | raw string | `theme` |
//! | Config | TOML | `~/.config/tasktracker/config.toml` |
//! | Backup | pretty JSON | `tasktracker-backup-YYYY-MM-DD.json` |
//!
//! ## Concurrency Safety
//!
//! - [`FileStore`] uses file locking (`fs2`) for concurrent access
//! - All writes are atomic (temp file + rename)
//!
//! ## Tracker Directory
//!
//! ```text
//! .tasktracker/
//! ├── subjects.json
//! ├── tasks.json
//! └── theme
//! ```
//!
//! ## Key Types
//!
//! - [`Workspace`] - Entry point for locating the tracker directory
//! - [`Gateway`] - Reads and writes the snapshot
//! - [`FileStore`] / [`MemoryStore`] - [`KeyValueStore`] backends
//! - [`Config`] - Global configuration

mod kv;
mod file;
mod gateway;
mod seed;
mod transfer;
mod config;
mod workspace;

pub use kv::{KeyValueStore, MemoryStore, StorageError};
pub use file::FileStore;
pub use gateway::{
    decode_collection, CorruptDataError, Gateway, Snapshot, Theme, SUBJECTS_KEY, TASKS_KEY,
    THEME_KEY,
};
pub use seed::seed_defaults;
pub use transfer::{backup_file_name, ExportDocument, ImportDocument, ImportError};
pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, LOCAL_DIR};
pub use workspace::{Workspace, WorkspaceError};
