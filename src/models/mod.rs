//! Data models module
//!
//! Defines the journal entry ("prayer") and its on-disk timestamp format.

pub mod entry;
pub mod timestamp;

pub use entry::{Entry, EntryStatus, DEFAULT_CATEGORY};
