//! Group bindings.

use std::future::Future;

use tracing::debug;
use wifi_p2p_core::completion;
use wifi_p2p_core::errors::BridgeResult;
use wifi_p2p_core::types::GroupInfo;
use wifi_p2p_core::NativeFuture;

use crate::bridge::settle;
use crate::WifiP2pBridge;

impl WifiP2pBridge {
    /// Create a group with this device as owner.
    pub fn create_group(&self) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        let (callback, pending) = completion::channel("create_group");
        debug!(module = self.module_name(), "Creating group");
        self.native.create_group(callback);
        settle(pending)
    }

    pub fn remove_group(&self) -> impl Future<Output = BridgeResult<()>> + Send + 'static {
        let (callback, pending) = completion::channel("remove_group");
        debug!(module = self.module_name(), "Removing group");
        self.native.remove_group(callback);
        settle(pending)
    }

    /// `None` when this device is not part of a group.
    pub fn get_group_info(&self) -> NativeFuture<Option<GroupInfo>> {
        self.native.get_group_info()
    }
}
