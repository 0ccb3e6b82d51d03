//! Parsed script lines, valid or malformed.
//!
//! A line that cannot be turned into a [`ComposerInput`] becomes a
//! [`MalformedLine`] so replay can report it and keep going.

use crate::model::ComposerInput;

/// One non-blank, non-comment script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEntry {
    /// A line that parsed into an input.
    Input {
        /// 1-indexed line number in the script.
        line_number: usize,
        /// The parsed input.
        input: ComposerInput,
    },
    /// A line that did not parse.
    Malformed(MalformedLine),
}

impl ScriptEntry {
    /// 1-indexed line number in the script.
    pub fn line_number(&self) -> usize {
        match self {
            ScriptEntry::Input { line_number, .. } => *line_number,
            ScriptEntry::Malformed(m) => m.line_number(),
        }
    }

    /// The parsed input, if this line is valid.
    pub fn as_input(&self) -> Option<ComposerInput> {
        match self {
            ScriptEntry::Input { input, .. } => Some(*input),
            ScriptEntry::Malformed(_) => None,
        }
    }

    /// The parse failure, if this line is malformed.
    pub fn as_malformed(&self) -> Option<&MalformedLine> {
        match self {
            ScriptEntry::Input { .. } => None,
            ScriptEntry::Malformed(m) => Some(m),
        }
    }
}

/// A script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    line_number: usize,
    raw_line: String,
    error_message: String,
}

impl MalformedLine {
    /// Record a line that failed to parse.
    pub fn new(
        line_number: usize,
        raw_line: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            error_message: error_message.into(),
        }
    }

    /// 1-indexed line number of the bad line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The line as read, untrimmed.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Why the line was rejected.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
