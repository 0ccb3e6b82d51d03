//! File-backed script source.

use crate::model::ScriptEntry;
use crate::model::error::InputError;
use crate::parser::parse_script;
use std::path::{Path, PathBuf};

/// A script file, read once at construction.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    content: String,
}

impl FileSource {
    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist,
    /// `InputError::Io` for other read failures.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, InputError> {
        let path = path.into();
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Self { path, content })
    }

    /// Path the script was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole script.
    pub fn entries(&self) -> Vec<ScriptEntry> {
        parse_script(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_entries_with_line_numbers() {
        let path = std::env::temp_dir().join("composer_bar_file_source.jsonl");
        fs::write(
            &path,
            "# header\n{\"event\":\"toggle_emoji\"}\n\n{\"event\":\"bogus\"}\n",
        )
        .unwrap();

        let source = FileSource::new(&path).unwrap();
        let _ = fs::remove_file(&path);

        let entries = source.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line_number(), 2);
        assert_eq!(entries[1].line_number(), 4);
        assert!(entries[1].as_malformed().is_some());
    }

    #[test]
    fn entries_can_be_read_repeatedly() {
        let path = std::env::temp_dir().join("composer_bar_file_source_twice.jsonl");
        fs::write(&path, "{\"event\":\"dismiss\"}\n").unwrap();

        let source = FileSource::new(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(source.entries(), source.entries());
    }

    #[test]
    fn missing_file_returns_file_not_found() {
        let result = FileSource::new("/nonexistent/composer/script.jsonl");
        match result {
            Err(InputError::FileNotFound { path }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/composer/script.jsonl"));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }
}
