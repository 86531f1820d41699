//! Peer discovery bindings.

use std::future::Future;

use tracing::debug;
use wifi_p2p_core::completion;
use wifi_p2p_core::errors::BridgeResult;
use wifi_p2p_core::types::{Device, DeviceList};
use wifi_p2p_core::NativeFuture;

use crate::bridge::settle;
use crate::WifiP2pBridge;

impl WifiP2pBridge {
    /// Start peer discovery. Discovered peers arrive on the peers-updated channel.
    pub fn start_discovering_peers(&self) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        let (callback, pending) = completion::channel("discover_peers");
        debug!(module = self.module_name(), "Starting peer discovery");
        self.native.discover_peers(callback);
        settle(pending)
    }

    pub fn stop_discovering_peers(&self) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        let (callback, pending) = completion::channel("stop_peer_discovery");
        debug!(module = self.module_name(), "Stopping peer discovery");
        self.native.stop_peer_discovery(callback);
        settle(pending)
    }

    /// Current peer list, shaped like the peers-updated payload.
    pub fn get_available_peers(&self) -> NativeFuture<DeviceList> {
        self.native.get_available_peers_list()
    }

    /// Current peer list as a bare array; `None` if the platform returned none.
    pub fn get_peer_list(&self) -> NativeFuture<Option<Vec<Device>>> {
        self.native.get_peer_list()
    }
}
