//! Unified input consumed by the controller.

use crate::model::{ComposerAction, KeyboardSignal};
use serde::Serialize;
use std::fmt;

/// One serialized input to the composer.
///
/// Button taps, keyboard notifications and host-requested dismissal all
/// arrive as a `ComposerInput` and are processed strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ComposerInput {
    /// A button tap.
    Action(ComposerAction),
    /// A system keyboard notification.
    Keyboard(KeyboardSignal),
    /// Host asked the bar to collapse (e.g. the conversation was dragged).
    Dismiss,
}

impl From<ComposerAction> for ComposerInput {
    fn from(action: ComposerAction) -> Self {
        ComposerInput::Action(action)
    }
}

impl From<KeyboardSignal> for ComposerInput {
    fn from(signal: KeyboardSignal) -> Self {
        ComposerInput::Keyboard(signal)
    }
}

impl fmt::Display for ComposerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposerInput::Action(action) => write!(f, "{action}"),
            ComposerInput::Keyboard(signal) => write!(f, "{signal}"),
            ComposerInput::Dismiss => f.write_str("dismiss"),
        }
    }
}
