//! Process-wide bridge singleton via `OnceLock`, lock-free after linking.
//!
//! The host links the native module once at startup; application code then
//! reaches the bridge through `get()`. Until then every access fails with
//! `NotLinked`, so "no events yet" can be told apart from "no native module".

use std::sync::{Arc, OnceLock};

use tracing::info;
use wifi_p2p_core::constants::NATIVE_MODULE_NAME;
use wifi_p2p_core::errors::{BridgeError, BridgeResult};
use wifi_p2p_core::{WifiP2pConfig, WifiP2pNative};

use crate::WifiP2pBridge;

/// Global singleton.
static RUNTIME: OnceLock<Arc<WifiP2pBridge>> = OnceLock::new();

/// Link the native module and create the global bridge.
///
/// Never installs a tracing subscriber; hosts that want the bridge's own
/// setup call [`wifi_p2p_core::tracing::init_tracing`] first. A second call
/// fails with `AlreadyLinked` and leaves the first bridge in place.
pub fn link(native: Arc<dyn WifiP2pNative>, config: WifiP2pConfig) -> BridgeResult<Arc<WifiP2pBridge>> {
    let bridge = Arc::new(WifiP2pBridge::with_config(native, config));
    let module = bridge.module_name().to_string();
    RUNTIME
        .set(Arc::clone(&bridge))
        .map_err(|_| BridgeError::AlreadyLinked {
            module: module.clone(),
        })?;

    info!(module = %module, "Native module linked");
    Ok(bridge)
}

/// The linked bridge, or `NotLinked`.
pub fn get() -> BridgeResult<Arc<WifiP2pBridge>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| BridgeError::NotLinked {
            module: NATIVE_MODULE_NAME.to_string(),
        })
}

pub fn is_linked() -> bool {
    RUNTIME.get().is_some()
}
