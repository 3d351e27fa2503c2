//! Terminal display module
//!
//! Prints Markdown with rich styling on a color-capable terminal.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
