use std::path::PathBuf;
use thiserror::Error;

/// Prayer journal error types
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("{0}")]
    Validation(String),

    #[error("Prayer ID {0} not found.")]
    NotFound(u32),

    #[error("Failed to save prayers to '{}': {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation cancelled.")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JournalError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::Cancelled => 130,
            _ => 1,
        }
    }

    /// Message shown to the user on stderr
    pub fn report(&self) -> String {
        match self {
            JournalError::NotFound(_) => format!("✗ {}", self),
            JournalError::Cancelled => self.to_string(),
            JournalError::Io(_) | JournalError::Json(_) | JournalError::TomlParse(_) => {
                format!("✗ Unexpected error: {}", self)
            }
            _ => format!("✗ Error: {}", self),
        }
    }
}

/// Result type for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;
