//! Configuration handling for tasktracker
//!
//! Configuration is stored in `~/.config/tasktracker/config.toml` (global).
//! A project-local tracker lives in a `.tasktracker/` directory created by
//! `tasktracker init`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project-local tracker directory
pub const LOCAL_DIR: &str = ".tasktracker";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Tracker directory used outside any project
    pub data_dir: Option<PathBuf>,

    /// Fill an empty tracker with sample subjects and tasks on first run
    pub seed_samples: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            data_dir: None,
            seed_samples: true,
        }
    }
}

/// Combined configuration (global + local tracker root)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    pub local_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let local_root = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::find_local_root(&cwd));

        Ok(Self { global, local_root })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tasktracker", "tasktracker")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the platform data directory used when nothing else is set
    pub fn default_data_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tasktracker", "tasktracker")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        Self::parse_global(&content).context("Failed to parse global config")
    }

    pub fn parse_global(content: &str) -> Result<GlobalConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Finds the nearest directory at or above `start` containing `.tasktracker/`
    pub fn find_local_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(LOCAL_DIR).is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// The tracker directory of the local root, if any
    pub fn local_data_dir(&self) -> Option<PathBuf> {
        self.local_root.as_ref().map(|root| root.join(LOCAL_DIR))
    }
}
