//! # wifi-p2p-core
//!
//! Foundation crate for the WiFi P2P bridge.
//! Defines the reason-code normalizer, errors, config, events, tracing,
//! payload types, the completion primitive, and the native collaborator trait.
//! The facade crate (`wifi-p2p-bridge`) depends on this.

pub mod completion;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use completion::{Completion, Pending, ReasonCallback};
pub use config::WifiP2pConfig;
pub use errors::error_code::WifiP2pErrorCode;
pub use errors::{normalize, BridgeError, BridgeResult, NormalizedError, ReasonCode};
pub use events::{EventChannel, EventEmitter, EventPayload, Subscription};
pub use traits::{NativeFuture, WifiP2pNative};
