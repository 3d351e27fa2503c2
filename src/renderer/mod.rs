//! Markdown renderer module
//!
//! Turns a journal listing into Markdown for the terminal.

use crate::models::timestamp::FORMAT;
use crate::models::{Entry, EntryStatus};
use crate::store::Listing;

/// Shown when the journal has no prayers at all
pub const EMPTY_MESSAGE: &str = "No prayers yet. Add your first prayer!";

/// Shown when a filter hides every prayer
pub const NO_ACTIVE_MESSAGE: &str = "No active prayers.";

/// Render a listing to Markdown
pub fn render_listing(listing: &Listing<'_>) -> String {
    let entries = match listing {
        Listing::Empty => return EMPTY_MESSAGE.to_string(),
        Listing::Entries(entries) => entries,
    };

    let mut output = String::from("# Your Prayer Journal\n\n");

    if entries.is_empty() {
        output.push_str(NO_ACTIVE_MESSAGE);
        return output;
    }

    let sections: Vec<String> = entries.iter().map(|e| render_entry(e)).collect();
    output.push_str(&sections.join("\n\n---\n\n"));
    output
}

fn render_entry(entry: &Entry) -> String {
    let status = match entry.status() {
        EntryStatus::Answered => format!("✓ {}", entry.status()),
        EntryStatus::Active => format!("⏳ {}", entry.status()),
    };

    let mut output = format!(
        "## ID: {} | {} | [{}]\n\n",
        entry.id, status, entry.category
    );
    output.push_str(&format!(
        "**Date:** {}\n",
        entry.date_created.format(FORMAT)
    ));
    output.push_str(&format!("**Prayer:** {}", entry.text));

    if let Some(answered) = entry.date_answered {
        output.push_str(&format!("\n**Answered:** {}", answered.format(FORMAT)));
    }

    output
}
