//! Stdin-backed script source for piped input.

use crate::model::ScriptEntry;
use crate::model::error::InputError;
use crate::parser::parse_script_line;
use std::io::{BufRead, BufReader, IsTerminal, Read};

/// Piped script input, e.g. `cat script.jsonl | composer-bar --replay -`.
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
    next_line: usize,
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource")
            .field("next_line", &self.next_line)
            .finish_non_exhaustive()
    }
}

impl StdinSource<std::io::Stdin> {
    /// Wrap process stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal,
    /// so replay never blocks waiting on a user who forgot to pipe.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }
}

impl<R: Read> StdinSource<R> {
    /// Wrap any reader; skips the terminal check.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            next_line: 1,
        }
    }

    /// Read to EOF and parse each line.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the reader fails or yields invalid UTF-8.
    pub fn read_entries(&mut self) -> Result<Vec<ScriptEntry>, InputError> {
        let mut entries = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            let line_number = self.next_line;
            self.next_line += 1;
            if let Some(entry) = parse_script_line(line_number, &line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComposerInput, Height, KeyboardSignal};

    #[test]
    fn reads_all_lines_until_eof() {
        let data = b"{\"event\":\"keyboard_will_show\",\"height\":300}\n{\"event\":\"dismiss\"}\n";
        let mut source = StdinSource::from_reader(&data[..]);

        let entries = source.read_entries().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].as_input(),
            Some(ComposerInput::Keyboard(KeyboardSignal::WillShow(
                Height::new(300.0).unwrap()
            )))
        );
        assert_eq!(entries[1].as_input(), Some(ComposerInput::Dismiss));
    }

    #[test]
    fn final_line_without_newline_is_read() {
        let data = b"{\"event\":\"toggle_plus\"}\n{\"event\":\"toggle_emoji\"}";
        let mut source = StdinSource::from_reader(&data[..]);

        let entries = source.read_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].line_number(), 2);
    }

    #[test]
    fn line_numbers_count_skipped_lines() {
        let data = b"\n# comment\n{\"event\":\"toggle_voice\"}\r\n";
        let mut source = StdinSource::from_reader(&data[..]);

        let entries = source.read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line_number(), 3);
        assert!(entries[0].as_input().is_some(), "CRLF is trimmed");
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let mut source = StdinSource::from_reader(&b""[..]);
        assert!(source.read_entries().unwrap().is_empty());
    }

    #[test]
    fn second_read_after_eof_is_empty() {
        let mut source = StdinSource::from_reader(&b"{\"event\":\"dismiss\"}\n"[..]);
        assert_eq!(source.read_entries().unwrap().len(), 1);
        assert!(source.read_entries().unwrap().is_empty());
    }
}
