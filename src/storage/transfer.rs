//! Export and import documents
//!
//! An export is a pretty-printed JSON object holding both collections and a
//! UTC timestamp. An import accepts any JSON object; both arrays are optional.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Board, Subject, Task};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error importing file. Please check the file format.")]
    Parse(#[source] serde_json::Error),
}

/// A full backup of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub subjects: Vec<Subject>,
    pub tasks: Vec<Task>,
    pub export_date: DateTime<Utc>,
}

impl ExportDocument {
    pub fn new(board: &Board, now: DateTime<Utc>) -> Self {
        Self {
            subjects: board.subjects.clone(),
            tasks: board.tasks.clone(),
            export_date: now.trunc_subsecs(3),
        }
    }

    /// Suggested file name, dated in UTC
    pub fn file_name(&self) -> String {
        backup_file_name(self.export_date.date_naive())
    }

    /// Two-space indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn backup_file_name(date: NaiveDate) -> String {
    format!("tasktracker-backup-{}.json", date.format("%Y-%m-%d"))
}

/// A parsed import file
///
/// A missing or `null` array reads as `None` and replaces the current
/// collection with an empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportDocument {
    #[serde(default)]
    pub subjects: Option<Vec<Subject>>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

impl ImportDocument {
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        serde_json::from_str(text).map_err(ImportError::Parse)
    }

    pub fn into_board(self) -> Board {
        Board::new(
            self.subjects.unwrap_or_default(),
            self.tasks.unwrap_or_default(),
        )
    }
}

impl From<ExportDocument> for ImportDocument {
    fn from(doc: ExportDocument) -> Self {
        Self {
            subjects: Some(doc.subjects),
            tasks: Some(doc.tasks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SubjectId, TaskId};
    use chrono::TimeZone;

    fn board() -> Board {
        Board::new(
            vec![Subject::new(SubjectId::new(1), "Work")],
            vec![Task::new(
                TaskId::new(1),
                "Report",
                SubjectId::new(1),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            )],
        )
    }

    #[test]
    fn export_shape() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let doc = ExportDocument::new(&board(), now);
        let json = doc.to_json_pretty().unwrap();

        assert!(json.contains("\"exportDate\": \"2024-03-01T23:30:00Z\""));
        assert!(json.contains("\n  \"subjects\": ["));
        assert!(json.contains("\"subjectId\": 1"));
        assert_eq!(doc.file_name(), "tasktracker-backup-2024-03-01.json");
    }

    #[test]
    fn export_timestamp_keeps_milliseconds_only() {
        let now = Utc.timestamp_nanos(1_709_335_800_123_456_789);
        let doc = ExportDocument::new(&board(), now);

        assert_eq!(doc.export_date.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn import_accepts_export() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let json = ExportDocument::new(&board(), now).to_json_pretty().unwrap();

        let doc = ImportDocument::parse(&json).unwrap();
        assert_eq!(doc.into_board(), board());
    }

    #[test]
    fn import_missing_arrays_are_empty() {
        let doc = ImportDocument::parse(r#"{"tasks": null}"#).unwrap();
        assert!(doc.subjects.is_none());
        assert!(doc.into_board().is_empty());

        let doc = ImportDocument::parse(r#"{"subjects": [{"id": 2, "name": "Home"}]}"#).unwrap();
        let board = doc.into_board();
        assert_eq!(board.subjects.len(), 1);
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn import_rejects_malformed_input() {
        for text in ["not json", "[1, 2]", r#"{"subjects": "many"}"#, r#"{"tasks": [{"id": 1}]}"#] {
            let err = ImportDocument::parse(text).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Error importing file. Please check the file format."
            );
        }
    }
}
