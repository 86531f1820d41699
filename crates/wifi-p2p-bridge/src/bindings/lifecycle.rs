//! `initialize()`: hand the native module's own init future to the caller.

use tracing::info;
use wifi_p2p_core::NativeFuture;

use crate::WifiP2pBridge;

impl WifiP2pBridge {
    /// Initialize the native module.
    ///
    /// Resolves with whether the platform manager and channel were acquired.
    /// Rejections (no foreground activity, service unavailable) come from the
    /// native future as `NativeRejected`.
    pub fn initialize(&self) -> NativeFuture<bool> {
        info!(module = self.module_name(), "Initializing native module");
        self.native.init()
    }
}
