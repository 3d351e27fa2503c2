//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// Decide color support from an environment lookup and the TTY flag.
///
/// `NO_COLOR` wins, then `CLICOLOR_FORCE` (non-zero), then `CLICOLOR=0`.
fn colors_enabled(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some() {
        return false;
    }

    if env("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if env("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}
