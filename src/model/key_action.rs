//! Domain-level keyboard actions independent of key bindings.

use crate::model::ComposerAction;

/// Actions the terminal host can map to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Tap one of the composer buttons.
    Composer(ComposerAction),
    /// Collapse the bar, as when the conversation list is dragged.
    Dismiss,
    /// Scroll the conversation one line toward older messages.
    ScrollUp,
    /// Scroll the conversation one line toward the newest message.
    ScrollDown,
    /// Append the draft to the conversation and clear it.
    SendDraft,
    /// Delete the last draft character.
    DeleteBackward,
    /// Exit the application.
    Quit,
}
