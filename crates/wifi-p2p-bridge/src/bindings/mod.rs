//! Operation wrappers and subscriptions on [`WifiP2pBridge`](crate::WifiP2pBridge).
//!
//! Every wrapper issues its native call immediately and returns a `'static`
//! future, so several operations can be in flight at once without borrowing
//! the bridge. No wrapper validates arguments, retries, or times out.

pub mod connection;
pub mod events;
pub mod group;
pub mod lifecycle;
pub mod peers;
pub mod service;
pub mod transfer;
