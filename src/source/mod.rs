//! Script input sources.
//!
//! Scripts come from a file or from piped stdin. Both are read to the
//! end and parsed line by line; replay is a batch operation.

use crate::model::ScriptEntry;
use crate::model::error::InputError;
use std::path::{Path, PathBuf};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Path argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Where a replay script is read from.
#[derive(Debug)]
pub enum InputSource {
    /// Script file read up front.
    File(FileSource),
    /// Piped standard input.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read and parse every remaining line.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading fails. Malformed lines are not
    /// errors; they come back as [`ScriptEntry::Malformed`].
    pub fn read_entries(&mut self) -> Result<Vec<ScriptEntry>, InputError> {
        match self {
            InputSource::File(f) => Ok(f.entries()),
            InputSource::Stdin(s) => s.read_entries(),
        }
    }

    /// Human-readable origin for log lines.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

fn is_stdin_path(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Pick the input source for a replay.
///
/// `None` or `-` reads stdin; anything else is a file path.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file,
/// `InputError::NoInput` when stdin is an interactive terminal, and
/// `InputError::Io` when the file cannot be read.
pub fn detect_input_source(script: Option<PathBuf>) -> Result<InputSource, InputError> {
    match script {
        Some(path) if !is_stdin_path(&path) => Ok(InputSource::File(FileSource::new(path)?)),
        _ => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComposerAction, ComposerInput};
    use std::fs;

    #[test]
    fn file_path_selects_file_source() {
        let path = std::env::temp_dir().join("composer_bar_source_detect.jsonl");
        fs::write(&path, "{\"event\":\"toggle_voice\"}\n").unwrap();

        let mut source = detect_input_source(Some(path.clone())).unwrap();
        let _ = fs::remove_file(&path);

        assert!(matches!(source, InputSource::File(_)));
        assert!(source.describe().ends_with("composer_bar_source_detect.jsonl"));
        let entries = source.read_entries().unwrap();
        assert_eq!(
            entries[0].as_input(),
            Some(ComposerInput::Action(ComposerAction::ToggleVoice))
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let result = detect_input_source(Some(PathBuf::from("/nonexistent/script.jsonl")));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn dash_is_stdin_path() {
        assert!(is_stdin_path(Path::new("-")));
        assert!(!is_stdin_path(Path::new("./-")));
        assert!(!is_stdin_path(Path::new("script.jsonl")));
    }
}
