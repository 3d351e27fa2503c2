use crate::config::{self, Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize prayer-journal.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!(
        "Prayers will be stored in: {}",
        config.journal_file.display()
    );

    Ok(())
}
