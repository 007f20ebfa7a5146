//! Subject (category) domain model

use serde::{Deserialize, Serialize};

use super::id::{Identified, SubjectId};

/// A category that tasks are filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

impl Subject {
    pub fn new(id: SubjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Case-insensitive name comparison, the rule behind subject uniqueness
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl Identified for Subject {
    fn raw_id(&self) -> u32 {
        self.id.get()
    }
}
