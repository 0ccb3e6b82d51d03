//! Domain model types (pure data, no I/O).

pub mod action;
pub mod error;
pub mod height;
pub mod input;
pub mod key_action;
pub mod keyboard;
pub mod mode;
pub mod panel;
pub mod script_entry;

pub use action::{ComposerAction, UnknownAction};
pub use error::{AppError, InputError, ParseError};
pub use height::{Height, InvalidHeight};
pub use input::ComposerInput;
pub use key_action::KeyAction;
pub use keyboard::KeyboardSignal;
pub use mode::{ButtonSlot, ButtonState, Mode};
pub use panel::{PanelId, PanelMetrics};
pub use script_entry::{MalformedLine, ScriptEntry};
