//! Storage gateway: the persisted snapshot
//!
//! The snapshot is three independent entries:
//!
//! | Key | Content |
//! |-----|---------|
//! | `subjects.json` | JSON array of `{id, name}` |
//! | `tasks.json` | JSON array of tasks (camelCase keys) |
//! | `theme` | raw `dark` or `light` |
//!
//! A malformed or undecodable entry is logged and treated as absent, so a
//! damaged file never stops the tracker from starting.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kv::{KeyValueStore, StorageError};
use crate::domain::{Board, Subject, Task};

pub const SUBJECTS_KEY: &str = "subjects.json";
pub const TASKS_KEY: &str = "tasks.json";
pub const THEME_KEY: &str = "theme";

/// A stored collection could not be parsed
#[derive(Debug, Error)]
#[error("Stored '{key}' is not valid: {source}")]
pub struct CorruptDataError {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// UI colour preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a stored value; anything but `dark` means light
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}': expected light or dark", other)),
        }
    }
}

/// What [`Gateway::load`] found in the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub theme: Theme,
    /// Neither collection was present (or readable): a first run
    pub fresh: bool,
}

/// Decodes one stored collection; `None` input means the key was absent
pub fn decode_collection<T: DeserializeOwned>(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<Vec<T>>, CorruptDataError> {
    match raw {
        None => Ok(None),
        Some(text) => serde_json::from_str(text)
            .map(Some)
            .map_err(|source| CorruptDataError { key, source }),
    }
}

/// Reads and writes the snapshot through a key-value store
#[derive(Debug, Clone)]
pub struct Gateway<S> {
    store: S,
}

impl<S: KeyValueStore> Gateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Writes subjects, tasks and theme, each under its own key
    ///
    /// Stops at the first rejected write; nothing is retried.
    pub fn save(&mut self, board: &Board, theme: Theme) -> Result<(), StorageError> {
        let subjects = encode(SUBJECTS_KEY, &board.subjects)?;
        let tasks = encode(TASKS_KEY, &board.tasks)?;

        self.store.set(SUBJECTS_KEY, &subjects)?;
        self.store.set(TASKS_KEY, &tasks)?;
        self.store.set(THEME_KEY, theme.as_str())?;

        tracing::debug!(
            subjects = board.subjects.len(),
            tasks = board.tasks.len(),
            theme = theme.as_str(),
            "saved snapshot"
        );
        Ok(())
    }

    /// Reads the snapshot, recovering from corrupt collections
    pub fn load(&self) -> Result<Snapshot, StorageError> {
        let subjects = self.load_collection::<Subject>(SUBJECTS_KEY)?;
        let tasks = self.load_collection::<Task>(TASKS_KEY)?;
        let theme = Theme::from_stored(self.read(THEME_KEY)?.as_deref());

        let fresh = subjects.is_none() && tasks.is_none();
        let board = Board::new(subjects.unwrap_or_default(), tasks.unwrap_or_default());

        tracing::debug!(
            subjects = board.subjects.len(),
            tasks = board.tasks.len(),
            theme = theme.as_str(),
            fresh,
            "loaded snapshot"
        );

        Ok(Snapshot {
            board,
            theme,
            fresh,
        })
    }

    fn load_collection<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<Vec<T>>, StorageError> {
        let raw = self.read(key)?;
        match decode_collection(key, raw.as_deref()) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(key, error = %e.source, "ignoring corrupt stored data");
                Ok(None)
            }
        }
    }

    fn read(&self, key: &'static str) -> Result<Option<String>, StorageError> {
        match self.store.get(key) {
            Err(StorageError::Encoding { source, .. }) => {
                tracing::warn!(key, error = %source, "ignoring undecodable stored data");
                Ok(None)
            }
            other => other,
        }
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, SubjectId, TaskId};
    use crate::storage::{FileStore, MemoryStore};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn board() -> Board {
        Board::new(
            vec![Subject::new(SubjectId::new(1), "Work")],
            vec![Task::new(
                TaskId::new(1),
                "Report",
                SubjectId::new(1),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )
            .with_priority(Priority::High)],
        )
    }

    #[test]
    fn empty_store_loads_fresh_light_snapshot() {
        let gateway = Gateway::new(MemoryStore::new());
        let snapshot = gateway.load().unwrap();

        assert!(snapshot.fresh);
        assert!(snapshot.board.is_empty());
        assert_eq!(snapshot.theme, Theme::Light);
    }

    #[test]
    fn save_then_load() {
        let mut gateway = Gateway::new(MemoryStore::new());
        gateway.save(&board(), Theme::Dark).unwrap();

        let snapshot = gateway.load().unwrap();
        assert_eq!(snapshot.board, board());
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(!snapshot.fresh);
    }

    #[test]
    fn saved_empty_collections_are_not_fresh() {
        let mut gateway = Gateway::new(MemoryStore::new());
        gateway.save(&Board::default(), Theme::Light).unwrap();

        let snapshot = gateway.load().unwrap();
        assert!(snapshot.board.is_empty());
        assert!(!snapshot.fresh);
    }

    #[test]
    fn stored_format_matches_wire_shape() {
        let mut gateway = Gateway::new(MemoryStore::new());
        gateway.save(&board(), Theme::Light).unwrap();

        let store = gateway.store();
        assert_eq!(
            store.get(SUBJECTS_KEY).unwrap().as_deref(),
            Some(r#"[{"id":1,"name":"Work"}]"#)
        );
        assert_eq!(
            store.get(TASKS_KEY).unwrap().as_deref(),
            Some(
                r#"[{"id":1,"title":"Report","subjectId":1,"description":"","dueDate":"2024-01-31","priority":"high","completed":false}]"#
            )
        );
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_subjects_fall_back_to_empty() {
        let mut store = MemoryStore::new();
        store.set(SUBJECTS_KEY, "{not json").unwrap();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":4,"title":"Gym","subjectId":2,"dueDate":"2024-01-01"}]"#,
            )
            .unwrap();

        let snapshot = Gateway::new(store).load().unwrap();
        assert!(snapshot.board.subjects.is_empty());
        assert_eq!(snapshot.board.tasks.len(), 1);
        assert!(!snapshot.fresh);
    }

    #[test]
    fn undecodable_tasks_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set(SUBJECTS_KEY, r#"[{"id":1,"name":"Work"}]"#).unwrap();
        fs::write(store.path_for(TASKS_KEY), [0xFF, 0xFE, b'[', b']']).unwrap();
        fs::write(store.path_for(THEME_KEY), [0xC3, 0x28]).unwrap();

        let snapshot = Gateway::new(store).load().unwrap();
        assert_eq!(snapshot.board.subjects.len(), 1);
        assert!(snapshot.board.tasks.is_empty());
        assert_eq!(snapshot.theme, Theme::Light);
        assert!(!snapshot.fresh);
    }

    #[test]
    fn both_corrupt_counts_as_fresh() {
        let mut store = MemoryStore::new();
        store.set(SUBJECTS_KEY, "oops").unwrap();
        store.set(TASKS_KEY, "[{]").unwrap();

        let snapshot = Gateway::new(store).load().unwrap();
        assert!(snapshot.fresh);
        assert!(snapshot.board.is_empty());
    }

    #[test]
    fn decode_reports_corrupt_key() {
        let err = decode_collection::<Subject>(SUBJECTS_KEY, Some("nope")).unwrap_err();
        assert_eq!(err.key, SUBJECTS_KEY);

        let absent = decode_collection::<Subject>(SUBJECTS_KEY, None).unwrap();
        assert!(absent.is_none());
    }

    #[test]
    fn unknown_theme_defaults_to_light() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn quota_failure_is_reported() {
        let mut gateway = Gateway::new(MemoryStore::with_quota(16));
        let err = gateway.save(&board(), Theme::Light).unwrap_err();

        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    }
}
