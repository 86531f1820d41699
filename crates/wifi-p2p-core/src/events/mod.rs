//! Event channels, the shared emitter, and subscription handles.

pub mod channel;
pub mod emitter;
pub mod subscription;

use serde::de::DeserializeOwned;

use crate::errors::BridgeResult;

pub use channel::EventChannel;
pub use emitter::EventEmitter;
pub use subscription::Subscription;

/// Payload fired by the native layer. Arbitrary JSON.
pub type EventPayload = serde_json::Value;

/// Decode a raw payload into one of the typed payloads in [`crate::types`].
pub fn decode_payload<T: DeserializeOwned>(payload: &EventPayload) -> BridgeResult<T> {
    Ok(T::deserialize(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceList;

    #[test]
    fn test_decode_peers_payload() {
        let payload = serde_json::json!({
            "devices": [{
                "deviceName": "Pixel",
                "deviceAddress": "aa:bb:cc:dd:ee:ff",
                "primaryDeviceType": "10-0050F204-5",
                "secondaryDeviceType": null,
                "isGroupOwner": false,
                "status": 3
            }]
        });
        let list: DeviceList = decode_payload(&payload).unwrap();
        assert_eq!(list.devices.len(), 1);
        assert_eq!(list.devices[0].device_name, "Pixel");
    }

    #[test]
    fn test_decode_mismatch_is_serialization_error() {
        let payload = serde_json::json!({ "devices": "nope" });
        let err = decode_payload::<DeviceList>(&payload).unwrap_err();
        assert!(matches!(err, crate::BridgeError::Serialization(_)));
    }
}
