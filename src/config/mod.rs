//! Configuration module
//!
//! Handles loading and saving of prayer-journal.toml configuration files.

mod types;

pub use types::Config;

use crate::error::{JournalError, Result};
use std::fs;
use std::path::Path;

/// Config file looked up in the current directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "prayer-journal.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        JournalError::Config(format!(
            "Cannot read config from '{}': {}. Run 'prayer-journal config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| JournalError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Resolve the active configuration.
///
/// An explicit path must exist. Otherwise `prayer-journal.toml` in the
/// current directory is used if present, falling back to defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                load(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
