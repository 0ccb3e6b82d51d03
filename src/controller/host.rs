//! Outbound command contract between the controller and its host.

use crate::model::{ButtonState, PanelId};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A host-side command failed.
///
/// The controller reports these upward but never rolls back the mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{command} failed: {reason}")]
pub struct HostError {
    /// Which host method failed.
    pub command: CommandKind,
    /// Host-supplied explanation.
    pub reason: String,
}

impl HostError {
    /// Failure of `command` with a free-form reason.
    pub fn new(command: CommandKind, reason: impl Into<String>) -> Self {
        Self {
            command,
            reason: reason.into(),
        }
    }
}

/// The view layer the controller drives.
///
/// Implementations own the real panel views; the controller only ever
/// refers to them by [`PanelId`].
pub trait ComposerHost {
    /// Focus the text field, which raises the keyboard.
    fn acquire_text_focus(&mut self) -> Result<(), HostError>;

    /// Drop text focus, which lowers the keyboard.
    fn release_text_focus(&mut self) -> Result<(), HostError>;

    /// Refresh button icons and selection flags.
    fn update_buttons(&mut self, buttons: &[ButtonState]) -> Result<(), HostError>;

    /// Insert the panel view into its container.
    ///
    /// The controller tracks which panels are mounted and calls this at
    /// most once per panel; hosts may treat a repeat as an error.
    fn mount_panel(&mut self, id: PanelId) -> Result<(), HostError>;

    /// Make a mounted panel the visible one.
    fn show_panel(&mut self, id: PanelId) -> Result<(), HostError>;

    /// Hide every panel. Mounted panels stay mounted.
    fn hide_all_panels(&mut self) -> Result<(), HostError>;

    /// Resize the bottom-anchored constraint.
    fn set_bottom_inset(&mut self, height: f64, animated: bool) -> Result<(), HostError>;
}

/// Fieldless tag naming one [`ComposerHost`] method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// [`ComposerHost::acquire_text_focus`]
    AcquireTextFocus,
    /// [`ComposerHost::release_text_focus`]
    ReleaseTextFocus,
    /// [`ComposerHost::update_buttons`]
    UpdateButtons,
    /// [`ComposerHost::mount_panel`]
    MountPanel,
    /// [`ComposerHost::show_panel`]
    ShowPanel,
    /// [`ComposerHost::hide_all_panels`]
    HideAllPanels,
    /// [`ComposerHost::set_bottom_inset`]
    SetBottomInset,
}

impl CommandKind {
    /// Method name on [`ComposerHost`].
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::AcquireTextFocus => "acquire_text_focus",
            CommandKind::ReleaseTextFocus => "release_text_focus",
            CommandKind::UpdateButtons => "update_buttons",
            CommandKind::MountPanel => "mount_panel",
            CommandKind::ShowPanel => "show_panel",
            CommandKind::HideAllPanels => "hide_all_panels",
            CommandKind::SetBottomInset => "set_bottom_inset",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A host command as data, for logging and recording hosts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    /// Text field took focus.
    AcquireTextFocus,
    /// Text field gave up focus.
    ReleaseTextFocus,
    /// Button row was redrawn.
    UpdateButtons {
        /// New button row, left to right.
        buttons: Vec<ButtonState>,
    },
    /// Panel view was inserted into its container.
    MountPanel {
        /// The mounted panel.
        panel: PanelId,
    },
    /// Panel became visible.
    ShowPanel {
        /// The shown panel.
        panel: PanelId,
    },
    /// Every panel was hidden.
    HideAllPanels,
    /// Bottom constraint was resized.
    SetBottomInset {
        /// New constant in device-independent units.
        height: f64,
        /// Whether the change animates.
        animated: bool,
    },
}

impl HostCommand {
    /// Which [`ComposerHost`] method this command records.
    pub fn kind(&self) -> CommandKind {
        match self {
            HostCommand::AcquireTextFocus => CommandKind::AcquireTextFocus,
            HostCommand::ReleaseTextFocus => CommandKind::ReleaseTextFocus,
            HostCommand::UpdateButtons { .. } => CommandKind::UpdateButtons,
            HostCommand::MountPanel { .. } => CommandKind::MountPanel,
            HostCommand::ShowPanel { .. } => CommandKind::ShowPanel,
            HostCommand::HideAllPanels => CommandKind::HideAllPanels,
            HostCommand::SetBottomInset { .. } => CommandKind::SetBottomInset,
        }
    }

    /// Method name on [`ComposerHost`].
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCommand::UpdateButtons { buttons } => {
                let icons: Vec<&str> = buttons.iter().map(|b| b.action.id()).collect();
                write!(f, "update_buttons({})", icons.join(","))
            }
            HostCommand::MountPanel { panel } => write!(f, "mount_panel({panel})"),
            HostCommand::ShowPanel { panel } => write!(f, "show_panel({panel})"),
            HostCommand::SetBottomInset { height, .. } => write!(f, "set_bottom_inset({height})"),
            HostCommand::AcquireTextFocus
            | HostCommand::ReleaseTextFocus
            | HostCommand::HideAllPanels => f.write_str(self.name()),
        }
    }
}
