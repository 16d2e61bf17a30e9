//! Append-only persistence of generated passwords.
//!
//! Each saved password is written as a human-readable block:
//!
//! ```text
//! ========================================
//! Generated: 2024-05-01 12:34:56
//! Password: kV8!pq2Z
//! Entropy: 51.68 bits
//! Strength: Medium
//! ========================================
//! ```
//!
//! followed by a blank line.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::pass::Strength;

pub const DEFAULT_OUTPUT_PATH: &str = "passwords.txt";

const DELIMITER: &str = "========================================";

/// Append one password block to `path`, creating the file if needed.
pub fn append_password(
    path: &Path,
    password: &str,
    bits: f64,
    strength: Strength,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "{DELIMITER}")?;
    writeln!(out, "Generated: {timestamp}")?;
    writeln!(out, "Password: {password}")?;
    writeln!(out, "Entropy: {bits:.2} bits")?;
    writeln!(out, "Strength: {strength}")?;
    writeln!(out, "{DELIMITER}")?;
    writeln!(out)?;
    out.flush()?;

    log::debug!("appended password block to {}", path.display());
    Ok(())
}
