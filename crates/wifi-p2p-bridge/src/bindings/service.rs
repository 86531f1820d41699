//! DNS-SD service bindings.

use tracing::debug;
use wifi_p2p_core::types::ServiceRecord;
use wifi_p2p_core::NativeFuture;

use crate::WifiP2pBridge;

impl WifiP2pBridge {
    /// Start service discovery. Results arrive on the DNS TXT record and
    /// DNS-SD service channels.
    pub fn discover_service(&self) -> NativeFuture<()> {
        debug!(module = self.module_name(), "Discovering services");
        self.native.discover_service()
    }

    /// Advertise `record` as this device's TXT record, replacing any earlier one.
    pub fn start_service_registration(&self, record: ServiceRecord) -> NativeFuture<bool> {
        debug!(keys = record.len(), "Registering local service");
        self.native.start_service_registration(record)
    }
}
