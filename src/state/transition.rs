//! Pure transition function for the composer mode.
//!
//! Every (mode, input) pair yields a defined next mode. Nothing here can
//! fail; invalid inputs are unrepresentable by the time they get here.

use crate::model::{ComposerAction, ComposerInput, Height, KeyboardSignal, Mode};

/// Apply a button action.
///
/// Each panel toggle is self-canceling (its own panel open → typing) and
/// mutually exclusive with the other panels (opens directly, never via
/// typing). `RequestKeyboard` always lands on typing with the last known
/// keyboard height.
pub fn apply_action(current: Mode, action: ComposerAction) -> Mode {
    let last_keyboard = current.last_keyboard_height();
    let typing = Mode::Typing {
        keyboard_height: last_keyboard,
    };

    match (current, action) {
        (Mode::Recording { .. }, ComposerAction::ToggleVoice) => typing,
        (_, ComposerAction::ToggleVoice) => Mode::Recording { last_keyboard },

        (Mode::EmojiPicker { .. }, ComposerAction::ToggleEmoji) => typing,
        (_, ComposerAction::ToggleEmoji) => Mode::EmojiPicker { last_keyboard },

        (Mode::PlusMenu { .. }, ComposerAction::TogglePlus) => typing,
        (_, ComposerAction::TogglePlus) => Mode::PlusMenu { last_keyboard },

        (_, ComposerAction::RequestKeyboard) => typing,
    }
}

/// Apply a system keyboard notification.
///
/// `WillShow` pre-empts any open panel. `WillHide` only collapses typing;
/// panels stay open until toggled explicitly.
pub fn apply_keyboard_signal(current: Mode, signal: KeyboardSignal) -> Mode {
    match (current, signal) {
        (_, KeyboardSignal::WillShow(height)) => Mode::Typing {
            keyboard_height: Some(height),
        },
        (Mode::Typing { keyboard_height }, KeyboardSignal::WillHide(inset)) => Mode::Idle {
            inset,
            last_keyboard: keyboard_height,
        },
        (
            Mode::Idle { .. }
            | Mode::Recording { .. }
            | Mode::EmojiPicker { .. }
            | Mode::PlusMenu { .. },
            KeyboardSignal::WillHide(_),
        ) => current,
    }
}

/// Collapse the bar to idle, keeping the current baseline when already idle.
pub fn dismiss(current: Mode, fallback_inset: Height) -> Mode {
    match current {
        Mode::Idle { .. } => current,
        Mode::Typing { .. }
        | Mode::Recording { .. }
        | Mode::EmojiPicker { .. }
        | Mode::PlusMenu { .. } => Mode::Idle {
            inset: fallback_inset,
            last_keyboard: current.last_keyboard_height(),
        },
    }
}

/// Dispatch any input to the matching transition.
pub fn apply_input(current: Mode, input: ComposerInput, fallback_inset: Height) -> Mode {
    match input {
        ComposerInput::Action(action) => apply_action(current, action),
        ComposerInput::Keyboard(signal) => apply_keyboard_signal(current, signal),
        ComposerInput::Dismiss => dismiss(current, fallback_inset),
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
