//! # wifi-p2p-bridge
//!
//! Async facade over a native WiFi-Direct module.
//!
//! ## Modules
//! - `bindings`: operation wrappers and event subscriptions, grouped by concern
//! - `bridge`: `WifiP2pBridge`, the single entry point for application code
//! - `runtime`: process-wide linked bridge (`OnceLock`)
//!
//! Callback actions are converted into futures that settle exactly once and
//! fail with a normalized reason code. Query and transfer calls return the
//! native layer's own future unchanged.

pub mod bindings;
mod bridge;
pub mod runtime;

pub use bridge::WifiP2pBridge;
pub use wifi_p2p_core::{
    BridgeError, BridgeResult, EventChannel, EventEmitter, EventPayload, NormalizedError,
    ReasonCode, Subscription, WifiP2pConfig, WifiP2pNative,
};
pub use wifi_p2p_core::types;
