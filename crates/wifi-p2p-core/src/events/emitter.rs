//! EventEmitter: the single shared listener registry.
//!
//! The native layer holds a clone and fires events into it; the bridge
//! registers application listeners on it. Listeners for one event name run in
//! registration order. Handlers are invoked outside the registry lock, so a
//! handler may add or remove listeners (including itself) while an event is
//! being delivered. Removal takes effect from the next emitted event.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::{error, trace};

use super::channel::EventChannel;
use super::subscription::Subscription;
use super::EventPayload;

pub(crate) type Handler = Arc<dyn Fn(&EventPayload) + Send + Sync>;

struct Listener {
    id: u64,
    handler: Handler,
}

/// Listener storage shared between the emitter and its subscriptions.
#[derive(Default)]
pub(crate) struct Registry {
    listeners: Mutex<FxHashMap<String, Vec<Listener>>>,
    next_id: AtomicU64,
}

impl Registry {
    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, Vec<Listener>>> {
        // Handlers never run under this lock, so a poisoned map is still consistent.
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn remove(&self, event_name: &str, id: u64) -> bool {
        let mut listeners = self.lock();
        let Some(entries) = listeners.get_mut(event_name) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|l| l.id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            listeners.remove(event_name);
        }
        removed
    }

    pub(crate) fn contains(&self, event_name: &str, id: u64) -> bool {
        self.lock()
            .get(event_name)
            .is_some_and(|entries| entries.iter().any(|l| l.id == id))
    }
}

/// Cloneable handle to one shared listener registry.
#[derive(Clone, Default)]
pub struct EventEmitter {
    registry: Arc<Registry>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for the fully qualified `event_name`.
    pub fn add_listener<F>(&self, event_name: impl Into<String>, handler: F) -> Subscription
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        let event_name = event_name.into();
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .lock()
            .entry(event_name.clone())
            .or_default()
            .push(Listener {
                id,
                handler: Arc::new(handler),
            });
        trace!(event = %event_name, listener = id, "Listener added");
        Subscription::new(Arc::downgrade(&self.registry), event_name, id)
    }

    /// Deliver `payload` to every listener of `event_name`.
    /// Returns the number of listeners invoked.
    pub fn emit(&self, event_name: &str, payload: &EventPayload) -> usize {
        let handlers: Vec<(u64, Handler)> = match self.registry.lock().get(event_name) {
            Some(entries) => entries
                .iter()
                .map(|l| (l.id, Arc::clone(&l.handler)))
                .collect(),
            None => Vec::new(),
        };

        trace!(event = event_name, listeners = handlers.len(), "Emitting event");

        for (id, handler) in &handlers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(payload)));
            if outcome.is_err() {
                error!(event = event_name, listener = id, "Event listener panicked");
            }
        }
        handlers.len()
    }

    /// Emit on a known channel.
    pub fn emit_channel(&self, channel: EventChannel, payload: &EventPayload) -> usize {
        self.emit(&channel.wire_name(), payload)
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.registry.lock().get(event_name).map_or(0, Vec::len)
    }

    /// Drop every listener of `event_name`. Outstanding subscriptions become inert.
    pub fn remove_all_listeners(&self, event_name: &str) -> usize {
        let removed = self
            .registry
            .lock()
            .remove(event_name)
            .map_or(0, |entries| entries.len());
        trace!(event = event_name, removed, "All listeners removed");
        removed
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events: Vec<(String, usize)> = self
            .registry
            .lock()
            .iter()
            .map(|(name, entries)| (name.clone(), entries.len()))
            .collect();
        f.debug_struct("EventEmitter").field("listeners", &events).finish()
    }
}
