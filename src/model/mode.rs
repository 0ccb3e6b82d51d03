//! Composer input mode: the five-way exclusive state value.
//!
//! `Mode` is immutable. Every query is a total match over the closed
//! variant set, so adding a variant forces each query to be revisited.

use crate::model::{ComposerAction, Height, PanelId, PanelMetrics};
use serde::Serialize;
use std::fmt;

/// Which of the five composer modes is active.
///
/// Panel variants remember the last keyboard height observed before the
/// panel opened, so returning to typing can restore it. That memory is not
/// part of the mode's identity: see the `PartialEq` impl.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    /// Nothing active, keyboard down. `inset` is the safe-area baseline.
    Idle {
        /// Bottom inset while nothing is active.
        inset: Height,
        /// Keyboard height remembered from the last typing session.
        last_keyboard: Option<Height>,
    },
    /// Text keyboard up. `None` until the system reports a height.
    Typing {
        /// Reported keyboard height.
        keyboard_height: Option<Height>,
    },
    /// Voice-record panel shown.
    Recording {
        /// Keyboard height remembered from the last typing session.
        last_keyboard: Option<Height>,
    },
    /// Emoji grid shown.
    EmojiPicker {
        /// Keyboard height remembered from the last typing session.
        last_keyboard: Option<Height>,
    },
    /// Attachment grid shown.
    PlusMenu {
        /// Keyboard height remembered from the last typing session.
        last_keyboard: Option<Height>,
    },
}

/// The three physical buttons of the bar.
///
/// The left slot renders `left_actions()[0]`; the two right slots render
/// the first and last of `right_actions()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSlot {
    /// Left of the text field.
    Voice,
    /// First slot right of the text field.
    Emoji,
    /// Rightmost slot.
    Plus,
}

impl ButtonSlot {
    /// Slots in left-to-right order.
    pub const ALL: [ButtonSlot; 3] = [ButtonSlot::Voice, ButtonSlot::Emoji, ButtonSlot::Plus];

    /// Panel this button toggles.
    pub fn panel(self) -> PanelId {
        match self {
            ButtonSlot::Voice => PanelId::Voice,
            ButtonSlot::Emoji => PanelId::Emoji,
            ButtonSlot::Plus => PanelId::Plus,
        }
    }
}

/// Rendered state of one button: which action it triggers and whether its
/// panel is the open one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    /// Which physical button.
    pub slot: ButtonSlot,
    /// Action a tap triggers right now.
    pub action: ComposerAction,
    /// Whether the button's panel is the open one.
    pub selected: bool,
}

impl ButtonState {
    /// Icon asset name for the current action.
    pub fn icon(&self) -> Option<&'static str> {
        self.action.icon()
    }
}

impl Mode {
    /// Starting mode for a fresh composer.
    pub fn initial(inset: Height) -> Self {
        Mode::Idle {
            inset,
            last_keyboard: None,
        }
    }

    /// Attached panel for this mode, if any.
    pub fn panel(&self) -> Option<PanelId> {
        match self {
            Mode::Idle { .. } | Mode::Typing { .. } => None,
            Mode::Recording { .. } => Some(PanelId::Voice),
            Mode::EmojiPicker { .. } => Some(PanelId::Emoji),
            Mode::PlusMenu { .. } => Some(PanelId::Plus),
        }
    }

    /// Height reserved below the text field. Never negative.
    pub fn panel_height(&self, metrics: &PanelMetrics) -> Height {
        match self {
            Mode::Idle { inset, .. } => *inset,
            Mode::Typing { keyboard_height } => {
                keyboard_height.unwrap_or(metrics.safe_area_inset)
            }
            Mode::Recording { .. } => metrics.safe_area_inset,
            Mode::EmojiPicker { .. } => metrics.emoji_height,
            Mode::PlusMenu { .. } => metrics.plus_height,
        }
    }

    /// Left-aligned affordances. Never empty.
    pub fn left_actions(&self) -> Vec<ComposerAction> {
        match self {
            Mode::Recording { .. } => vec![ComposerAction::RequestKeyboard],
            Mode::Idle { .. }
            | Mode::Typing { .. }
            | Mode::EmojiPicker { .. }
            | Mode::PlusMenu { .. } => vec![ComposerAction::ToggleVoice],
        }
    }

    /// Right-aligned affordances. Never empty.
    ///
    /// The button whose panel is open offers the keyboard instead.
    pub fn right_actions(&self) -> Vec<ComposerAction> {
        match self {
            Mode::EmojiPicker { .. } => {
                vec![ComposerAction::RequestKeyboard, ComposerAction::TogglePlus]
            }
            Mode::PlusMenu { .. } => {
                vec![ComposerAction::ToggleEmoji, ComposerAction::RequestKeyboard]
            }
            Mode::Idle { .. } | Mode::Typing { .. } | Mode::Recording { .. } => {
                vec![ComposerAction::ToggleEmoji, ComposerAction::TogglePlus]
            }
        }
    }

    /// Only `Typing` shows the system keyboard.
    pub fn keyboard_visible(&self) -> bool {
        match self {
            Mode::Typing { .. } => true,
            Mode::Idle { .. }
            | Mode::Recording { .. }
            | Mode::EmojiPicker { .. }
            | Mode::PlusMenu { .. } => false,
        }
    }

    /// Most recent keyboard height this mode knows about.
    pub fn last_keyboard_height(&self) -> Option<Height> {
        match self {
            Mode::Typing { keyboard_height } => *keyboard_height,
            Mode::Idle { last_keyboard, .. }
            | Mode::Recording { last_keyboard }
            | Mode::EmojiPicker { last_keyboard }
            | Mode::PlusMenu { last_keyboard } => *last_keyboard,
        }
    }

    /// Button slots with the action each one shows and its selection flag.
    pub fn buttons(&self) -> [ButtonState; 3] {
        let left = self.left_actions();
        let right = self.right_actions();
        let open = self.panel();
        let button = |slot: ButtonSlot, action: Option<&ComposerAction>, fallback| ButtonState {
            slot,
            action: action.copied().unwrap_or(fallback),
            selected: open == Some(slot.panel()),
        };
        [
            button(ButtonSlot::Voice, left.first(), ComposerAction::ToggleVoice),
            button(ButtonSlot::Emoji, right.first(), ComposerAction::ToggleEmoji),
            button(ButtonSlot::Plus, right.last(), ComposerAction::TogglePlus),
        ]
    }

    /// Variant name without payload.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle { .. } => "idle",
            Mode::Typing { .. } => "typing",
            Mode::Recording { .. } => "recording",
            Mode::EmojiPicker { .. } => "emoji_picker",
            Mode::PlusMenu { .. } => "plus_menu",
        }
    }
}

/// Same variant, and for `Typing` the same carried height.
///
/// The remembered keyboard height on the other variants and the idle inset
/// do not participate, so the controller suppresses side effects for them.
impl PartialEq for Mode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Mode::Typing {
                    keyboard_height: a,
                },
                Mode::Typing {
                    keyboard_height: b,
                },
            ) => a == b,
            (Mode::Idle { .. }, Mode::Idle { .. })
            | (Mode::Recording { .. }, Mode::Recording { .. })
            | (Mode::EmojiPicker { .. }, Mode::EmojiPicker { .. })
            | (Mode::PlusMenu { .. }, Mode::PlusMenu { .. }) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Idle { inset, .. } => write!(f, "idle({inset})"),
            Mode::Typing {
                keyboard_height: Some(h),
            } => write!(f, "typing({h})"),
            Mode::Typing {
                keyboard_height: None,
            } => f.write_str("typing(?)"),
            Mode::Recording { .. } | Mode::EmojiPicker { .. } | Mode::PlusMenu { .. } => {
                f.write_str(self.name())
            }
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
