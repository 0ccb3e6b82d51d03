//! Host that records every command instead of touching real views.
//!
//! Backs headless replay and tests. Individual commands can be made to
//! fail to exercise the controller's best-effort error path.

use crate::controller::{CommandKind, ComposerHost, HostCommand, HostError};
use crate::model::{ButtonState, PanelId};
use std::collections::HashSet;

/// [`ComposerHost`] that appends each call to an in-memory log.
#[derive(Debug, Default)]
pub struct RecordingHost {
    commands: Vec<HostCommand>,
    failing: HashSet<CommandKind>,
}

impl RecordingHost {
    /// Empty log, nothing failing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future call of `command` fail.
    pub fn fail_on(&mut self, command: CommandKind) {
        self.failing.insert(command);
    }

    /// Commands recorded so far, oldest first.
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Take the commands recorded so far, leaving the log empty.
    pub fn drain(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// How many times a panel was mounted.
    pub fn mount_count(&self, panel: PanelId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, HostCommand::MountPanel { panel: p } if *p == panel))
            .count()
    }

    fn record(&mut self, command: HostCommand) -> Result<(), HostError> {
        let kind = command.kind();
        self.commands.push(command);
        if self.failing.contains(&kind) {
            Err(HostError::new(kind, "refused by host"))
        } else {
            Ok(())
        }
    }
}

impl ComposerHost for RecordingHost {
    fn acquire_text_focus(&mut self) -> Result<(), HostError> {
        self.record(HostCommand::AcquireTextFocus)
    }

    fn release_text_focus(&mut self) -> Result<(), HostError> {
        self.record(HostCommand::ReleaseTextFocus)
    }

    fn update_buttons(&mut self, buttons: &[ButtonState]) -> Result<(), HostError> {
        self.record(HostCommand::UpdateButtons {
            buttons: buttons.to_vec(),
        })
    }

    fn mount_panel(&mut self, id: PanelId) -> Result<(), HostError> {
        self.record(HostCommand::MountPanel { panel: id })
    }

    fn show_panel(&mut self, id: PanelId) -> Result<(), HostError> {
        self.record(HostCommand::ShowPanel { panel: id })
    }

    fn hide_all_panels(&mut self) -> Result<(), HostError> {
        self.record(HostCommand::HideAllPanels)
    }

    fn set_bottom_inset(&mut self, height: f64, animated: bool) -> Result<(), HostError> {
        self.record(HostCommand::SetBottomInset { height, animated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_on_refuses_only_that_command_kind() {
        let mut host = RecordingHost::new();
        host.fail_on(CommandKind::ShowPanel);

        assert!(host.mount_panel(PanelId::Plus).is_ok());
        let err = host.show_panel(PanelId::Plus).unwrap_err();
        assert_eq!(err.command, CommandKind::ShowPanel);
        assert!(host.hide_all_panels().is_ok());

        assert_eq!(host.commands().len(), 3, "failed calls are still recorded");
        assert_eq!(host.mount_count(PanelId::Plus), 1);
    }
}
