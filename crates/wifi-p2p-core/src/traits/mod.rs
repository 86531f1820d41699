pub mod native;

pub use native::{NativeFuture, WifiP2pNative};
