//! Journal store module
//!
//! Owns the in-memory list of prayers and its backing JSON file.
//! The whole list is loaded once on open and rewritten after every change.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{JournalError, Result};
use crate::models::{timestamp, Entry, DEFAULT_CATEGORY};

/// Problem found while loading the journal file. Loading recovers with an
/// empty journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file exists but is not a valid prayer list
    Corrupted { path: PathBuf, reason: String },
    /// The file exists but could not be read
    Unreadable { path: PathBuf, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Corrupted { path, reason } => write!(
                f,
                "{} is corrupted ({}). Starting with empty journal.",
                path.display(),
                reason
            ),
            LoadWarning::Unreadable { path, reason } => {
                write!(f, "Error loading prayers from {}: {}", path.display(), reason)
            }
        }
    }
}

/// Result of listing the journal
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The journal holds no prayers at all
    Empty,
    /// Prayers surviving the filter, in insertion order
    Entries(Vec<&'a Entry>),
}

/// Result of marking a prayer answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkAnswered {
    Marked(Entry),
    AlreadyAnswered(Entry),
    NotFound,
}

/// Result of deleting a prayer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Deleted(Entry),
    NotFound,
}

/// File-backed collection of prayers
#[derive(Debug)]
pub struct JournalStore {
    path: PathBuf,
    entries: Vec<Entry>,
    load_warning: Option<LoadWarning>,
}

impl JournalStore {
    /// Open the journal at `path`, loading whatever it currently holds
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (entries, load_warning) = match load(&path) {
            Ok(entries) => (entries, None),
            Err(warning) => {
                tracing::debug!("journal load failed: {}", warning);
                (Vec::new(), Some(warning))
            }
        };

        Self {
            path,
            entries,
            load_warning,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Warning raised while loading, if the file could not be used
    pub fn load_warning(&self) -> Option<&LoadWarning> {
        self.load_warning.as_ref()
    }

    /// Add a new prayer and persist the journal
    pub fn add(&mut self, text: &str, category: Option<&str>) -> Result<Entry> {
        if text.trim().is_empty() {
            return Err(JournalError::Validation(
                "Prayer text cannot be empty".to_string(),
            ));
        }

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        // Length-based ids can repeat after a delete; kept for file compatibility.
        let id = self.entries.len() as u32 + 1;
        let entry = Entry::new(id, text, category);
        self.entries.push(entry.clone());
        self.save()?;

        tracing::debug!(id, category = %entry.category, "prayer added");
        Ok(entry)
    }

    /// List prayers, optionally hiding answered ones
    pub fn list(&self, show_answered: bool) -> Listing<'_> {
        if self.is_empty() {
            return Listing::Empty;
        }

        Listing::Entries(
            self.entries
                .iter()
                .filter(|e| show_answered || e.is_active())
                .collect(),
        )
    }

    /// Mark the first prayer with `id` as answered
    pub fn mark_answered(&mut self, id: u32) -> Result<MarkAnswered> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return Ok(MarkAnswered::NotFound);
        };

        if !entry.mark_answered(timestamp::now()) {
            return Ok(MarkAnswered::AlreadyAnswered(entry.clone()));
        }

        let marked = entry.clone();
        self.save()?;

        tracing::debug!(id, "prayer marked answered");
        Ok(MarkAnswered::Marked(marked))
    }

    /// Delete the first prayer with `id`
    pub fn delete(&mut self, id: u32) -> Result<Removal> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(Removal::NotFound);
        };

        let removed = self.entries.remove(index);
        self.save()?;

        tracing::debug!(id, "prayer deleted");
        Ok(Removal::Deleted(removed))
    }

    /// Write the full journal to disk
    pub fn save(&self) -> Result<()> {
        let persistence = |source| JournalError::Persistence {
            path: self.path.clone(),
            source,
        };

        let mut json = serde_json::to_string_pretty(&self.entries)?;
        json.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(persistence)?;
            }
        }

        // Write beside the target and rename so an interrupt never truncates it
        let tmp_path = tmp_path_for(&self.path);
        fs::write(&tmp_path, json).map_err(persistence)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(persistence(e));
        }

        tracing::debug!(path = %self.path.display(), count = self.entries.len(), "journal saved");
        Ok(())
    }
}

/// Read the journal file. A missing file is an empty journal.
fn load(path: &Path) -> std::result::Result<Vec<Entry>, LoadWarning> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| LoadWarning::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| LoadWarning::Corrupted {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
