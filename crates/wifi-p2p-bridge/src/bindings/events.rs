//! Event subscriptions: one generic primitive plus one wrapper per channel.

use tracing::{debug, trace};
use wifi_p2p_core::errors::{BridgeError, BridgeResult};
use wifi_p2p_core::{EventChannel, EventPayload, Subscription};

use crate::WifiP2pBridge;

impl WifiP2pBridge {
    /// Register `callback` for `channel` on the shared event source.
    ///
    /// Fails with `EventSourceUnavailable` when the native module has no emitter.
    pub fn subscribe_on_event<F>(&self, channel: EventChannel, callback: F) -> BridgeResult<Subscription>
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        let events = self
            .events
            .as_ref()
            .ok_or_else(|| BridgeError::EventSourceUnavailable {
                module: self.module_name().to_string(),
            })?;

        let wire_name = channel.wire_name();
        debug!(event = %wire_name, "Subscribing");

        if self.config.events.log_payloads {
            let event = wire_name.clone();
            Ok(events.add_listener(wire_name, move |payload: &EventPayload| {
                trace!(event = %event, payload = %payload, "Delivering event");
                callback(payload);
            }))
        } else {
            Ok(events.add_listener(wire_name, callback))
        }
    }

    pub fn subscribe_on_this_device_changed<F>(&self, callback: F) -> BridgeResult<Subscription>
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.subscribe_on_event(EventChannel::ThisDeviceChanged, callback)
    }

    pub fn subscribe_on_peers_updates<F>(&self, callback: F) -> BridgeResult<Subscription>
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.subscribe_on_event(EventChannel::PeersUpdated, callback)
    }

    pub fn subscribe_on_connection_info_updates<F>(&self, callback: F) -> BridgeResult<Subscription>
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.subscribe_on_event(EventChannel::ConnectionInfoUpdated, callback)
    }

    pub fn subscribe_on_dns_txt_record_available<F>(&self, callback: F) -> BridgeResult<Subscription>
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.subscribe_on_event(EventChannel::DnsTxtRecordAvailable, callback)
    }

    pub fn subscribe_on_dns_sd_service_available<F>(&self, callback: F) -> BridgeResult<Subscription>
    where
        F: Fn(&EventPayload) + Send + Sync + 'static,
    {
        self.subscribe_on_event(EventChannel::DnsSdServiceAvailable, callback)
    }
}
