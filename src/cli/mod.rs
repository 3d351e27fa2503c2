//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: Record a new prayer
//! - list: Show the journal
//! - answered: Mark a prayer as answered
//! - delete: Remove a prayer
//! - config init: Initialize configuration file

pub mod add;
pub mod answered;
pub mod config;
pub mod delete;
pub mod list;

use std::path::{Path, PathBuf};

use crate::config::{self as settings, Config};
use crate::error::Result;
use crate::store::JournalStore;

/// Resolve configuration, applying a `--file` override
pub fn load_config(config_path: Option<&Path>, file: Option<PathBuf>) -> Result<Config> {
    let mut config = settings::resolve(config_path)?;
    if let Some(file) = file {
        config.journal_file = file;
    }
    Ok(config)
}

fn open_store(config: &Config) -> JournalStore {
    let store = JournalStore::open(&config.journal_file);
    if let Some(warning) = store.load_warning() {
        eprintln!("Warning: {}", warning);
    }
    tracing::debug!(path = %store.path().display(), entries = store.len(), "journal opened");
    store
}
