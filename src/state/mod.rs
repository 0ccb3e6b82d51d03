//! Composer state machine (pure).
//!
//! All state transitions are pure functions testable without a host.

pub mod transition;

pub use transition::{apply_action, apply_input, apply_keyboard_signal, dismiss};
