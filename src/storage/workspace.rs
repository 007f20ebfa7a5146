//! Tracker workspace
//!
//! Resolves which directory holds the tracker files and hands out stores.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use thiserror::Error;

use super::config::{Config, LOCAL_DIR};
use super::file::FileStore;
use super::gateway::Gateway;
use crate::service::Tracker;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Could not determine a data directory. Pass --data-dir or run 'tasktracker init'.")]
    NoDataDir,

    #[error("Data directory is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// An opened tracker directory
#[derive(Debug, Clone)]
pub struct Workspace {
    dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Picks the tracker directory: explicit path, then the nearest
    /// `.tasktracker/`, then the configured `data_dir`, then the platform
    /// data directory
    pub fn resolve(explicit: Option<&Path>, config: Config) -> Result<Self> {
        let dir = explicit
            .map(Path::to_path_buf)
            .or_else(|| config.local_data_dir())
            .or_else(|| config.global.data_dir.clone())
            .or_else(Config::default_data_dir)
            .ok_or(WorkspaceError::NoDataDir)?;

        tracing::debug!(dir = %dir.display(), "resolved data directory");
        Self::open(dir, config)
    }

    /// Opens a tracker directory; it is created on first write
    pub fn open(dir: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(WorkspaceError::NotADirectory(dir).into());
        }
        Ok(Self { dir, config })
    }

    /// Creates a project-local `.tasktracker/` under `root`
    ///
    /// Returns the created directory. An existing one is left as is.
    pub fn init(root: &Path) -> Result<PathBuf> {
        let dir = root.join(LOCAL_DIR);

        fs::create_dir_all(&dir).with_context(|| {
            format!("Failed to create {} directory: {}", LOCAL_DIR, dir.display())
        })?;

        Ok(dir)
    }

    /// Returns the tracker directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file store for this directory
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.dir)
    }

    /// Loads the tracker, seeding it on first run if configured
    pub fn tracker(&self, today: NaiveDate) -> Result<Tracker<FileStore>> {
        let gateway = Gateway::new(self.store());
        Tracker::open(gateway, today, self.config.global.seed_samples).with_context(|| {
            format!("Failed to load tracker data from {}", self.dir.display())
        })
    }
}
