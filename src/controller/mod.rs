//! Controller: owns the current mode and drives the host (impure shell).
//!
//! The controller never edits a `Mode` in place. Each input produces a
//! whole new value through the pure transition function; when it differs
//! from the current one the controller commits it and then runs the host
//! commands in a fixed order:
//!
//! 1. keyboard focus (acquire when typing, release otherwise)
//! 2. button icons and selection flags
//! 3. panel visibility (hide all, then mount once and show the active one)
//! 4. bottom inset, animated
//! 5. observer notification
//!
//! Host failures are collected and returned; they never roll back the
//! committed mode.

pub mod host;
pub mod observer;
pub mod recording;

pub use host::{CommandKind, ComposerHost, HostCommand, HostError};
pub use observer::{Observers, SubscriptionId};
pub use recording::RecordingHost;

use crate::model::{ComposerAction, ComposerInput, KeyboardSignal, Mode, PanelId, PanelMetrics};
use crate::state::apply_input;
use std::collections::BTreeSet;
use std::sync::mpsc::Receiver;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// An accepted, state-changing input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// The input that caused the change.
    pub input: ComposerInput,
    /// Mode before the input.
    pub from: Mode,
    /// Mode committed after the input.
    pub to: Mode,
}

/// Outcome of a successfully dispatched input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applied {
    /// Next mode equals the current one; no host commands, no notification.
    Unchanged,
    /// Next mode was committed and the host synced.
    Changed(Transition),
}

impl Applied {
    /// True when the input produced a new mode.
    pub fn is_changed(&self) -> bool {
        matches!(self, Applied::Changed(_))
    }
}

/// The mode was committed but one or more host commands failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("composer is now {mode} but {} host command(s) failed", failures.len())]
pub struct SideEffectError {
    /// The committed mode.
    pub mode: Mode,
    /// Every host command that failed, in dispatch order.
    pub failures: Vec<HostError>,
}

/// Owns the single current-mode cell for one composer bar.
#[derive(Debug)]
pub struct Controller<H: ComposerHost> {
    mode: Mode,
    host: H,
    metrics: PanelMetrics,
    mounted: BTreeSet<PanelId>,
    observers: Observers,
}

impl<H: ComposerHost> Controller<H> {
    /// Start idle at the safe-area inset. The host is not touched until
    /// the first change or an explicit [`Controller::resync`].
    pub fn new(host: H, metrics: PanelMetrics) -> Self {
        Self {
            mode: Mode::initial(metrics.safe_area_inset),
            host,
            metrics,
            mounted: BTreeSet::new(),
            observers: Observers::new(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Panel heights the controller resolves modes against.
    pub fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }

    /// The driven host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to drain recorded commands.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the controller, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Panels already inserted into their container.
    pub fn mounted_panels(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.mounted.iter().copied()
    }

    /// Call `callback` with the new mode after every committed change.
    pub fn subscribe(&mut self, callback: impl FnMut(&Mode) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Receive every committed mode over a channel.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<Mode>) {
        self.observers.subscribe_channel()
    }

    /// Drop a registration. Returns whether one was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Process a button tap.
    pub fn handle_action(&mut self, action: ComposerAction) -> Result<Applied, SideEffectError> {
        self.apply(ComposerInput::Action(action))
    }

    /// Process a keyboard notification.
    pub fn handle_keyboard(&mut self, signal: KeyboardSignal) -> Result<Applied, SideEffectError> {
        self.apply(ComposerInput::Keyboard(signal))
    }

    /// Collapse the bar back to idle.
    pub fn dismiss(&mut self) -> Result<Applied, SideEffectError> {
        self.apply(ComposerInput::Dismiss)
    }

    /// Process one input.
    ///
    /// # Errors
    ///
    /// Returns [`SideEffectError`] when the mode changed but some host
    /// commands failed. The new mode is committed either way and observers
    /// have been notified.
    pub fn apply(&mut self, input: ComposerInput) -> Result<Applied, SideEffectError> {
        let next = apply_input(self.mode, input, self.metrics.safe_area_inset);
        if next == self.mode {
            trace!(%input, mode = %self.mode, "input left composer mode unchanged");
            return Ok(Applied::Unchanged);
        }

        let from = std::mem::replace(&mut self.mode, next);
        debug!(%input, %from, to = %next, "composer mode changed");

        let failures = self.sync_host();
        self.observers.notify(&next);

        if failures.is_empty() {
            Ok(Applied::Changed(Transition {
                input,
                from,
                to: next,
            }))
        } else {
            Err(SideEffectError {
                mode: next,
                failures,
            })
        }
    }

    /// Re-issue the host commands for the current mode without notifying
    /// observers. Mounted panels are not mounted again.
    ///
    /// # Errors
    ///
    /// Returns [`SideEffectError`] listing the failed host commands.
    pub fn resync(&mut self) -> Result<(), SideEffectError> {
        let failures = self.sync_host();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(SideEffectError {
                mode: self.mode,
                failures,
            })
        }
    }

    fn sync_host(&mut self) -> Vec<HostError> {
        let mode = self.mode;
        let mut failures = Vec::new();
        let mut check = |result: Result<(), HostError>| {
            if let Err(err) = result {
                warn!(error = %err, mode = %mode, "host command failed");
                failures.push(err);
            }
        };

        check(if mode.keyboard_visible() {
            self.host.acquire_text_focus()
        } else {
            self.host.release_text_focus()
        });

        check(self.host.update_buttons(&mode.buttons()));

        check(self.host.hide_all_panels());
        if let Some(panel) = mode.panel() {
            let mounted = if self.mounted.contains(&panel) {
                true
            } else {
                match self.host.mount_panel(panel) {
                    Ok(()) => {
                        self.mounted.insert(panel);
                        true
                    }
                    Err(err) => {
                        check(Err(err));
                        false
                    }
                }
            };
            if mounted {
                check(self.host.show_panel(panel));
            }
        }

        check(
            self.host
                .set_bottom_inset(mode.panel_height(&self.metrics).get(), true),
        );

        failures
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
