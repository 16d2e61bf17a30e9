//! Shared terminal utilities.
//!
//! Box drawing, ANSI helpers, and raw mode management.

mod output;

pub use output::*;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// RAII guard that disables raw mode on drop, so a panic or early
/// return can never leave the terminal unreadable.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
