//! Error types for composer-bar.
//!
//! The transition function is total and has no error type of its own.
//! Everything here belongs to the boundary: reading and parsing scripted
//! input, and the top-level binary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary's run paths
//!   - [`InputError`] - Script file/stdin reading failures
//!   - [`ParseError`] - A script line that is not a valid composer input
//!   - `ConfigError`, `LoggingError`, `TuiError` from their own modules
//!
//! Parse errors are non-fatal: the offending line is logged and skipped.

use crate::model::{InvalidHeight, UnknownAction};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the input script.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Failed to write replay output.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading script input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// Script file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// No file given and stdin is a terminal.
    #[error("No input: provide a script file or pipe to stdin")]
    NoInput,

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors for a single script line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Line is not valid JSON or does not match any input shape.
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// serde_json error text.
        message: String,
    },

    /// Keyboard signal carried a negative or non-finite height.
    #[error("Invalid height: {0}")]
    InvalidHeight(#[from] InvalidHeight),

    /// Event name outside the closed set.
    #[error("{0}")]
    UnknownAction(#[from] UnknownAction),

    /// Keyboard event without a `height`.
    #[error("{event} requires a height")]
    MissingHeight {
        /// Event name.
        event: String,
    },

    /// Button or dismiss event carrying a `height`.
    #[error("{event} does not take a height")]
    UnexpectedHeight {
        /// Event name.
        event: String,
    },
}
