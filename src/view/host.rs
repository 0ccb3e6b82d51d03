//! Terminal host: the composer's view state plus a simulated keyboard.
//!
//! A terminal has no system keyboard to raise, so focus changes queue the
//! notification a real keyboard would post. The event loop feeds those
//! back into the controller, which is how the keyboard height reaches
//! `Typing` the same way it does on a device.

use crate::controller::{CommandKind, ComposerHost, HostError};
use crate::model::{ButtonState, Height, KeyboardSignal, Mode, PanelId};
use std::collections::{BTreeSet, VecDeque};
use tracing::trace;

#[derive(Debug)]
/// [`ComposerHost`] backing the terminal demo.
///
/// Holds what the frame should draw and the keyboard notifications the
/// event loop has yet to deliver.
pub struct TerminalHost {
    keyboard_height: Height,
    safe_area_inset: Height,
    focused: bool,
    buttons: Vec<ButtonState>,
    mounted: BTreeSet<PanelId>,
    visible_panel: Option<PanelId>,
    bottom_inset: f64,
    pending: VecDeque<KeyboardSignal>,
}

impl TerminalHost {
    /// A host showing `initial` with nothing mounted.
    pub fn new(keyboard_height: Height, safe_area_inset: Height, initial: Mode) -> Self {
        Self {
            keyboard_height,
            safe_area_inset,
            focused: false,
            buttons: initial.buttons().to_vec(),
            mounted: BTreeSet::new(),
            visible_panel: None,
            bottom_inset: safe_area_inset.get(),
            pending: VecDeque::new(),
        }
    }

    /// Whether the text field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Button row as last updated.
    pub fn buttons(&self) -> &[ButtonState] {
        &self.buttons
    }

    /// Panel currently shown, if any.
    pub fn visible_panel(&self) -> Option<PanelId> {
        self.visible_panel
    }

    /// Whether `panel` has been mounted.
    pub fn is_mounted(&self, panel: PanelId) -> bool {
        self.mounted.contains(&panel)
    }

    /// Current bottom constraint.
    pub fn bottom_inset(&self) -> f64 {
        self.bottom_inset
    }

    /// Next simulated keyboard notification, oldest first.
    pub fn take_keyboard_signal(&mut self) -> Option<KeyboardSignal> {
        self.pending.pop_front()
    }
}

impl ComposerHost for TerminalHost {
    fn acquire_text_focus(&mut self) -> Result<(), HostError> {
        if !self.focused {
            self.focused = true;
            self.pending
                .push_back(KeyboardSignal::WillShow(self.keyboard_height));
        }
        Ok(())
    }

    fn release_text_focus(&mut self) -> Result<(), HostError> {
        if self.focused {
            self.focused = false;
            self.pending
                .push_back(KeyboardSignal::WillHide(self.safe_area_inset));
        }
        Ok(())
    }

    fn update_buttons(&mut self, buttons: &[ButtonState]) -> Result<(), HostError> {
        self.buttons = buttons.to_vec();
        Ok(())
    }

    // The controller's own mounted set decides when to mount; a repeat here
    // means the two have drifted apart.
    fn mount_panel(&mut self, id: PanelId) -> Result<(), HostError> {
        trace!(panel = %id, "mounting panel");
        if !self.mounted.insert(id) {
            return Err(HostError::new(CommandKind::MountPanel, format!("{id} already mounted")));
        }
        Ok(())
    }

    fn show_panel(&mut self, id: PanelId) -> Result<(), HostError> {
        if !self.mounted.contains(&id) {
            return Err(HostError::new(CommandKind::ShowPanel, format!("{id} is not mounted")));
        }
        self.visible_panel = Some(id);
        Ok(())
    }

    fn hide_all_panels(&mut self) -> Result<(), HostError> {
        self.visible_panel = None;
        Ok(())
    }

    fn set_bottom_inset(&mut self, height: f64, _animated: bool) -> Result<(), HostError> {
        self.bottom_inset = height;
        Ok(())
    }
}
