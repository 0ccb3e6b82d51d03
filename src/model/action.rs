//! User-initiated composer actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Actions a user can trigger from the composer bar buttons.
///
/// These represent user intent. Which button shows which action at any
/// moment is decided by the affordance queries on [`crate::model::Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposerAction {
    /// Open the voice-record panel, or return to typing when it is open.
    ToggleVoice,
    /// Open the emoji grid, or return to typing when it is open.
    ToggleEmoji,
    /// Open the attachment grid, or return to typing when it is open.
    TogglePlus,
    /// Bring up the text keyboard from any mode.
    RequestKeyboard,
}

/// Action name that is not part of the closed action set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown composer action: {0:?}")]
pub struct UnknownAction(pub String);

impl ComposerAction {
    /// Every action, in button order.
    pub const ALL: [ComposerAction; 4] = [
        ComposerAction::ToggleVoice,
        ComposerAction::ToggleEmoji,
        ComposerAction::TogglePlus,
        ComposerAction::RequestKeyboard,
    ];

    /// Stable identifier used by button views.
    pub fn id(self) -> &'static str {
        match self {
            ComposerAction::ToggleVoice => "voice",
            ComposerAction::ToggleEmoji => "emoji",
            ComposerAction::TogglePlus => "plus",
            ComposerAction::RequestKeyboard => "keyboard",
        }
    }

    /// Icon asset name for the button showing this action.
    ///
    /// Only the button view reads this; the state machine ignores it.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            ComposerAction::ToggleVoice => Some("voice"),
            ComposerAction::ToggleEmoji => Some("emoji"),
            ComposerAction::TogglePlus => Some("plus"),
            ComposerAction::RequestKeyboard => Some("keyboard"),
        }
    }

    /// snake_case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ComposerAction::ToggleVoice => "toggle_voice",
            ComposerAction::ToggleEmoji => "toggle_emoji",
            ComposerAction::TogglePlus => "toggle_plus",
            ComposerAction::RequestKeyboard => "request_keyboard",
        }
    }
}

impl fmt::Display for ComposerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComposerAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComposerAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
