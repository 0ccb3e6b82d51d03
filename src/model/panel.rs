//! Attached panels and their sizing.

use crate::model::Height;
use serde::Serialize;
use std::fmt;

/// Auxiliary panel attached below the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    /// Hold-to-talk recorder.
    Voice,
    /// Emoji grid.
    Emoji,
    /// Attachment grid.
    Plus,
}

impl PanelId {
    /// Every panel.
    pub const ALL: [PanelId; 3] = [PanelId::Voice, PanelId::Emoji, PanelId::Plus];

    /// Lowercase name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Voice => "voice",
            PanelId::Emoji => "emoji",
            PanelId::Plus => "plus",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default emoji grid height.
pub const DEFAULT_EMOJI_HEIGHT: f64 = 400.0;
/// Default attachment grid height.
pub const DEFAULT_PLUS_HEIGHT: f64 = 260.0;
/// Default bottom safe-area inset (home-indicator devices).
pub const DEFAULT_SAFE_AREA_INSET: f64 = 34.0;

/// Fixed sizes the mode queries need to turn a variant into a height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMetrics {
    /// Device bottom inset; used by the voice panel and as a fallback.
    pub safe_area_inset: Height,
    /// Emoji grid height.
    pub emoji_height: Height,
    /// Attachment grid height.
    pub plus_height: Height,
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self {
            safe_area_inset: Height::new(DEFAULT_SAFE_AREA_INSET).unwrap_or(Height::ZERO),
            emoji_height: Height::new(DEFAULT_EMOJI_HEIGHT).unwrap_or(Height::ZERO),
            plus_height: Height::new(DEFAULT_PLUS_HEIGHT).unwrap_or(Height::ZERO),
        }
    }
}
