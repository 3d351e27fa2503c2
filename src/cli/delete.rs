use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::store::Removal;

/// Delete a prayer
pub fn run(config: &Config, id: u32) -> Result<()> {
    let mut store = super::open_store(config);

    match store.delete(id)? {
        Removal::Deleted(_) => {
            println!("✓ Prayer {} deleted.", id);
            Ok(())
        }
        Removal::NotFound => Err(JournalError::NotFound(id)),
    }
}
