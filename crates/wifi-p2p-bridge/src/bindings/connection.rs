//! Connection bindings.

use std::future::Future;

use tracing::debug;
use wifi_p2p_core::completion;
use wifi_p2p_core::errors::BridgeResult;
use wifi_p2p_core::types::{ConnectConfig, ConnectionInfo};
use wifi_p2p_core::NativeFuture;

use crate::bridge::settle;
use crate::WifiP2pBridge;

impl WifiP2pBridge {
    /// Connect to `device_address` with default settings.
    pub fn connect(&self, device_address: &str) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        self.connect_with_config(ConnectConfig::new(device_address))
    }

    /// Resolving means the request was accepted; the outcome of group
    /// negotiation arrives on the connection-info-updated channel.
    pub fn connect_with_config(
        &self,
        config: ConnectConfig,
    ) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        let (callback, pending) = completion::channel("connect_with_config");
        debug!(
            device = %config.device_address,
            group_owner_intent = ?config.group_owner_intent,
            "Connecting"
        );
        self.native.connect_with_config(config, callback);
        settle(pending)
    }

    /// Abort an ongoing connect negotiation.
    ///
    /// This is its own operation: a pending `connect` future still settles
    /// from its own native completion.
    pub fn cancel_connect(&self) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        let (callback, pending) = completion::channel("cancel_connect");
        debug!(module = self.module_name(), "Cancelling connect");
        self.native.cancel_connect(callback);
        settle(pending)
    }

    pub fn get_connection_info(&self) -> NativeFuture<ConnectionInfo> {
        self.native.get_connection_info()
    }
}
