use serde::{Deserialize, Serialize};

use super::device::Device;

/// Arguments to a connect request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectConfig {
    pub device_address: String,
    /// 0..=15, how strongly this device wants to become group owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_owner_intent: Option<i32>,
}

impl ConnectConfig {
    pub fn new(device_address: impl Into<String>) -> Self {
        Self {
            device_address: device_address.into(),
            group_owner_intent: None,
        }
    }

    pub fn with_group_owner_intent(mut self, intent: i32) -> Self {
        self.group_owner_intent = Some(intent);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOwnerAddress {
    pub host_address: String,
    #[serde(default)]
    pub is_loopback_address: bool,
}

/// Payload of the connection-info-updated event and of `get_connection_info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub group_formed: bool,
    pub is_group_owner: bool,
    #[serde(default)]
    pub group_owner_address: Option<GroupOwnerAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub interface: String,
    pub network_name: String,
    pub passphrase: String,
    #[serde(default)]
    pub owner: Option<Device>,
    #[serde(default)]
    pub clients: Vec<Device>,
}
