use crate::config::Config;
use crate::error::Result;

/// Record a new prayer request
pub fn run(config: &Config, text: &str, category: Option<&str>) -> Result<()> {
    let mut store = super::open_store(config);

    let category = category.unwrap_or(&config.default_category);
    let entry = store.add(text, Some(category))?;

    println!("✓ Prayer added successfully! (ID: {})", entry.id);
    Ok(())
}
