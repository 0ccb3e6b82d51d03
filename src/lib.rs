//! composer-bar
//!
//! Input-mode state machine for a chat composer bar: which of the text
//! keyboard, voice recorder, emoji grid or attachment grid is showing,
//! and what the bar's buttons and bottom inset look like in each case.
//!
//! Follows a Pure Core / Impure Shell layout: `model` and `state` are
//! pure values and functions; `controller` owns the one mutable mode cell
//! and drives a host; `replay` and `view` are hosts for scripts and for
//! the terminal.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod parser;
pub mod replay;
pub mod source;
pub mod state;
pub mod view;
