//! Generation settings remembered between runs.

mod file;

use crate::pass::ClassSet;

/// Last-used generation parameters. Menu prompts default to these, and
/// every successful generation writes them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 5,
            classes: ClassSet::ALL,
            output_file_path: String::from(crate::file_io::DEFAULT_OUTPUT_PATH),
        }
    }
}
