//! Centralized warning and status messages for CLI output.

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red) - never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Summary after file output - suppressed in quiet mode.
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        let count = crate::terminal::format_number(count);
        println!("{count} password(s) \u{2192} {path}");
    }
}
