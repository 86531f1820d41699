//! Subscription handle returned by [`EventEmitter::add_listener`](super::EventEmitter::add_listener).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Weak;

use tracing::trace;

use super::channel::EventChannel;
use super::emitter::Registry;

/// Handle for one registered listener.
///
/// Dropping the handle does NOT unregister the listener; call [`remove`](Self::remove).
/// Removing twice, or after the emitter is gone, is a no-op.
pub struct Subscription {
    registry: Weak<Registry>,
    event_name: String,
    id: u64,
    removed: AtomicBool,
}

impl Subscription {
    pub(crate) fn new(registry: Weak<Registry>, event_name: String, id: u64) -> Self {
        Self {
            registry,
            event_name,
            id,
            removed: AtomicBool::new(false),
        }
    }

    /// Stop this listener from receiving further events.
    pub fn remove(&self) {
        if self.removed.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            let removed = registry.remove(&self.event_name, self.id);
            trace!(event = %self.event_name, listener = self.id, removed, "Listener removed");
        }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        if self.removed.load(Ordering::Acquire) {
            return false;
        }
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(&self.event_name, self.id))
    }

    /// Fully qualified event name this listener is registered for.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn channel(&self) -> Option<EventChannel> {
        EventChannel::from_wire_name(&self.event_name)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event_name", &self.event_name)
            .field("id", &self.id)
            .field("removed", &self.removed.load(Ordering::Relaxed))
            .finish()
    }
}
