//! Integer identifiers for subjects and tasks
//!
//! ID Format:
//! - Subject IDs: positive integers (`1`, `2`, ...), displayed as `#1`
//! - Task IDs: positive integers, displayed as `#1`
//!
//! New IDs are `max existing + 1`, starting at 1, so an ID is never reused
//! while a higher one is still alive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid ID: expected a positive integer like '3' or '#3', got '{0}'")]
    Invalid(String),
}

/// Anything carrying a numeric identifier that takes part in ID allocation
pub trait Identified {
    fn raw_id(&self) -> u32;
}

/// Returns the next free identifier for a collection: `max + 1`, or 1 if empty
///
/// `None` once the highest ID is `u32::MAX`.
pub fn next_id<T: Identified>(items: &[T]) -> Option<u32> {
    items
        .iter()
        .map(Identified::raw_id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

fn parse_raw(s: &str) -> Result<u32, IdError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(IdError::Invalid(s.to_string())),
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_raw(s).map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a subject (category)
    SubjectId
);

numeric_id!(
    /// Identifier of a task
    TaskId
);
