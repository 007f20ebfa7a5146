//! # Mutation Service
//!
//! [`Tracker`] applies every state change to the board and saves the
//! snapshot afterwards. Outcomes are reported as plain values ([`Toggle`],
//! [`Cleared`]) that the presentation turns into [`Notice`]s.

mod notice;
mod tracker;

pub use notice::{Notice, Severity};
pub use tracker::{Cleared, Toggle, Tracker, TrackerError};
