//! System keyboard notifications.

use crate::model::Height;
use serde::Serialize;
use std::fmt;

/// Signals delivered by the host's keyboard-notification adapter.
///
/// On `WillShow` the height is the measured keyboard height. On `WillHide`
/// it is the safe-area inset the bar should fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "signal", content = "height", rename_all = "snake_case")]
pub enum KeyboardSignal {
    /// Keyboard is about to appear with the given height.
    WillShow(Height),
    /// Keyboard is about to disappear; carries the fallback inset.
    WillHide(Height),
}

impl KeyboardSignal {
    /// Height carried by either signal.
    pub fn height(self) -> Height {
        match self {
            KeyboardSignal::WillShow(h) | KeyboardSignal::WillHide(h) => h,
        }
    }
}

impl fmt::Display for KeyboardSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardSignal::WillShow(h) => write!(f, "keyboard_will_show({h})"),
            KeyboardSignal::WillHide(h) => write!(f, "keyboard_will_hide({h})"),
        }
    }
}
