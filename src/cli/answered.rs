use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::store::MarkAnswered;

/// Mark a prayer as answered
pub fn run(config: &Config, id: u32) -> Result<()> {
    let mut store = super::open_store(config);

    match store.mark_answered(id)? {
        MarkAnswered::Marked(_) => {
            println!("✓ Prayer {} marked as answered! Praise God! 🙏", id);
        }
        MarkAnswered::AlreadyAnswered(_) => {
            println!("⚠️  Prayer {} was already marked as answered.", id);
        }
        MarkAnswered::NotFound => return Err(JournalError::NotFound(id)),
    }

    Ok(())
}
