use serde::{Deserialize, Serialize};

/// Peer connection state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Connected,
    Invited,
    Failed,
    Available,
    Unavailable,
    Other(i32),
}

impl From<i32> for DeviceStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Connected,
            1 => Self::Invited,
            2 => Self::Failed,
            3 => Self::Available,
            4 => Self::Unavailable,
            other => Self::Other(other),
        }
    }
}

/// A WiFi P2P device (peer or this device).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_name: String,
    pub device_address: String,
    #[serde(default)]
    pub primary_device_type: Option<String>,
    #[serde(default)]
    pub secondary_device_type: Option<String>,
    #[serde(default)]
    pub is_group_owner: bool,
    #[serde(default)]
    pub status: i32,
}

impl Device {
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus::from(self.status)
    }
}

/// Payload of the peers-updated event and of `get_available_peers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceList {
    #[serde(default)]
    pub devices: Vec<Device>,
}
