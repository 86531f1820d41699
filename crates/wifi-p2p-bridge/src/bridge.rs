//! WifiP2pBridge: owns the native module handle and the shared event source.

use std::sync::Arc;

use tracing::{debug, warn};
use wifi_p2p_core::completion::Pending;
use wifi_p2p_core::constants::NATIVE_MODULE_NAME;
use wifi_p2p_core::errors::{normalize, BridgeResult};
use wifi_p2p_core::{EventEmitter, WifiP2pConfig, WifiP2pNative};

/// The bridge facade. Operation wrappers live in [`crate::bindings`].
pub struct WifiP2pBridge {
    pub(crate) native: Arc<dyn WifiP2pNative>,
    /// Taken from the native module at construction. `None` makes every
    /// subscription fail with `EventSourceUnavailable`.
    pub(crate) events: Option<EventEmitter>,
    pub(crate) config: WifiP2pConfig,
}

impl WifiP2pBridge {
    pub fn new(native: Arc<dyn WifiP2pNative>) -> Self {
        Self::with_config(native, WifiP2pConfig::default())
    }

    /// An explicit `config.module_name` wins; left at the default, the name
    /// reported by the native module is used.
    pub fn with_config(native: Arc<dyn WifiP2pNative>, mut config: WifiP2pConfig) -> Self {
        if config.module_name == NATIVE_MODULE_NAME && native.module_name() != NATIVE_MODULE_NAME {
            config.module_name = native.module_name().to_string();
        }

        let events = native.event_source();
        if events.is_none() {
            warn!(
                module = %config.module_name,
                "Native module exposes no event source; subscriptions are unavailable"
            );
        }
        Self {
            native,
            events,
            config,
        }
    }

    pub fn config(&self) -> &WifiP2pConfig {
        &self.config
    }

    pub fn native(&self) -> &Arc<dyn WifiP2pNative> {
        &self.native
    }

    /// The shared event source, if the native module provides one.
    pub fn event_source(&self) -> Option<&EventEmitter> {
        self.events.as_ref()
    }

    pub(crate) fn module_name(&self) -> &str {
        &self.config.module_name
    }
}

impl std::fmt::Debug for WifiP2pBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WifiP2pBridge")
            .field("module", &self.config.module_name)
            .field("events", &self.events.is_some())
            .finish()
    }
}

/// Await a reason-code completion: `None` resolves, a code rejects.
pub(crate) async fn settle(pending: Pending<Option<i32>>) -> BridgeResult<()> {
    let operation = pending.operation();
    match normalize(pending.await?) {
        None => {
            debug!(operation, "Native action succeeded");
            Ok(())
        }
        Some(err) => {
            warn!(operation, code = %err.code, reason = %err.message, "Native action failed");
            Err(err.into())
        }
    }
}
