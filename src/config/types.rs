use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::DEFAULT_CATEGORY;

/// Prayer journal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the prayers
    pub journal_file: PathBuf,

    /// Category used by `add` when none is given
    pub default_category: String,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Hide answered prayers from `list` unless asked otherwise
    pub hide_answered: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_file: PathBuf::from("prayers.json"),
            default_category: DEFAULT_CATEGORY.to_string(),
            display: Display::default(),
        }
    }
}
