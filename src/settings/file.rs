//! Settings file persistence.
//!
//! Single CSV line at `~/.config/entropass/settings`. Unparseable
//! fields fall back to their previous values; a malformed line is
//! rewritten from defaults.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    save_to(settings, &default_path())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    load_from(settings, &default_path())
}

fn save_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.classes.upper,
        settings.classes.lower,
        settings.classes.digit,
        settings.classes.special,
        settings.output_file_path,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

fn load_from(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        save_to(settings, path)?;
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != 7 {
        log::warn!("malformed settings file, rewriting defaults");
        save_to(settings, path)?;
        return Ok(());
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.classes.upper = parts[2].parse().unwrap_or(settings.classes.upper);
    settings.classes.lower = parts[3].parse().unwrap_or(settings.classes.lower);
    settings.classes.digit = parts[4].parse().unwrap_or(settings.classes.digit);
    settings.classes.special = parts[5].parse().unwrap_or(settings.classes.special);
    settings.output_file_path = parts[6].to_string();

    Ok(())
}

fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/entropass/settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let saved = Settings {
            pass_length: 20,
            number_of_passwords: 3,
            classes: ClassSet {
                upper: true,
                lower: false,
                digit: true,
                special: false,
            },
            output_file_path: "out.txt".into(),
        };
        save_to(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load_from(&mut loaded, &path).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_file_is_seeded_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn malformed_line_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "not,enough,fields\n").unwrap();

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());

        // The file was rewritten into parseable form.
        let mut reloaded = Settings::default();
        reloaded.pass_length = 1;
        load_from(&mut reloaded, &path).unwrap();
        assert_eq!(reloaded, Settings::default());
    }

    #[test]
    fn unparseable_numbers_keep_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "abc,4,true,true,true,true,out.txt\n").unwrap();

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings.pass_length, Settings::default().pass_length);
        assert_eq!(settings.number_of_passwords, 4);
        assert_eq!(settings.output_file_path, "out.txt");
    }
}
