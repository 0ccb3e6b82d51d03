//! Observer registrations for state-change notifications.

use crate::model::Mode;
use std::sync::mpsc::{self, Receiver};

/// Handle returned by a subscription; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Mode)>;

/// Ordered list of registered callbacks.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    /// No registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&Mode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Register a channel-backed observer.
    ///
    /// The registration stays until unsubscribed; sends to a dropped
    /// receiver are ignored.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<Mode>) {
        let (tx, rx) = mpsc::channel();
        let id = self.subscribe(move |mode| {
            let _ = tx.send(*mode);
        });
        (id, rx)
    }

    /// Returns whether a registration was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver `mode` to every registration.
    pub fn notify(&mut self, mode: &Mode) {
        for (_, callback) in &mut self.entries {
            callback(mode);
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
