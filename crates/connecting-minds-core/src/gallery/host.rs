//! Page environment the gallery acquires resources from.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use super::identity::InstanceId;

/// Resources held while a card is expanded.
///
/// The gallery calls `lock_scroll` + `attach_dismiss_listeners` when it goes
/// from no active card to an active one, and the matching release pair on
/// every way back out (dismiss or drop). Implementations never see an
/// unbalanced call from a single gallery.
pub trait OverlayHost {
    /// Stop the page behind the overlay from scrolling.
    fn lock_scroll(&self);

    /// Restore normal page scrolling.
    fn unlock_scroll(&self);

    /// Install the global Escape key listener for `instance`.
    fn attach_dismiss_listeners(&self, instance: InstanceId);

    /// Remove the listener installed for `instance`.
    fn detach_dismiss_listeners(&self, instance: InstanceId);
}

#[derive(Debug, Default)]
struct HostLog {
    scroll_locked: bool,
    listeners: HashSet<InstanceId>,
    locks: usize,
    unlocks: usize,
    attaches: usize,
    detaches: usize,
}

/// In-memory host that records what the gallery acquired.
///
/// Clones share the same log, so a test can keep one handle while the
/// gallery owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Arc<Mutex<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.log.lock().scroll_locked
    }

    /// Number of listeners currently installed.
    pub fn active_listeners(&self) -> usize {
        self.log.lock().listeners.len()
    }

    pub fn has_listener(&self, instance: InstanceId) -> bool {
        self.log.lock().listeners.contains(&instance)
    }

    pub fn lock_count(&self) -> usize {
        self.log.lock().locks
    }

    pub fn unlock_count(&self) -> usize {
        self.log.lock().unlocks
    }

    pub fn attach_count(&self) -> usize {
        self.log.lock().attaches
    }

    pub fn detach_count(&self) -> usize {
        self.log.lock().detaches
    }
}

impl OverlayHost for RecordingHost {
    fn lock_scroll(&self) {
        let mut log = self.log.lock();
        log.scroll_locked = true;
        log.locks += 1;
    }

    fn unlock_scroll(&self) {
        let mut log = self.log.lock();
        log.scroll_locked = false;
        log.unlocks += 1;
    }

    fn attach_dismiss_listeners(&self, instance: InstanceId) {
        let mut log = self.log.lock();
        log.listeners.insert(instance);
        log.attaches += 1;
    }

    fn detach_dismiss_listeners(&self, instance: InstanceId) {
        let mut log = self.log.lock();
        log.listeners.remove(&instance);
        log.detaches += 1;
    }
}
