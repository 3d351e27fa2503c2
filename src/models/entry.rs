use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp;

/// Category assigned when the caller does not supply one
pub const DEFAULT_CATEGORY: &str = "General";

/// A single prayer request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier, unique within a journal
    pub id: u32,
    /// Request text, stored trimmed
    pub text: String,
    /// Category, stored trimmed
    pub category: String,
    /// When the entry was created
    #[serde(with = "timestamp")]
    pub date_created: NaiveDateTime,
    /// Whether the request has been answered
    pub answered: bool,
    /// When the entry was marked answered
    #[serde(with = "timestamp::option")]
    pub date_answered: Option<NaiveDateTime>,
}

/// Lifecycle state of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Active,
    Answered,
}

impl Entry {
    /// Create a new, unanswered entry stamped with the current time
    pub fn new(id: u32, text: &str, category: &str) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            category: category.trim().to_string(),
            date_created: timestamp::now(),
            answered: false,
            date_answered: None,
        }
    }

    pub fn status(&self) -> EntryStatus {
        if self.answered {
            EntryStatus::Answered
        } else {
            EntryStatus::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.status() == EntryStatus::Active
    }

    /// Transition to answered. Returns false if it already was.
    pub fn mark_answered(&mut self, at: NaiveDateTime) -> bool {
        if self.answered {
            return false;
        }
        self.answered = true;
        self.date_answered = Some(at);
        true
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Active => write!(f, "ACTIVE"),
            EntryStatus::Answered => write!(f, "ANSWERED"),
        }
    }
}
