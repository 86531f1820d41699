//! The closed set of event channels and their wire-level names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{EVENT_NAME_SEPARATOR, MODULE_PREFIX};

/// A named event stream fired by the native layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventChannel {
    #[serde(rename = "PEERS_UPDATED")]
    PeersUpdated,
    #[serde(rename = "CONNECTION_INFO_UPDATED")]
    ConnectionInfoUpdated,
    #[serde(rename = "THIS_DEVICE_CHANGED_ACTION")]
    ThisDeviceChanged,
    #[serde(rename = "DNSTXTRECORDAVAILABLE")]
    DnsTxtRecordAvailable,
    #[serde(rename = "DNSSDSERVICEAVAILABLE")]
    DnsSdServiceAvailable,
}

impl EventChannel {
    pub const ALL: [EventChannel; 5] = [
        Self::PeersUpdated,
        Self::ConnectionInfoUpdated,
        Self::ThisDeviceChanged,
        Self::DnsTxtRecordAvailable,
        Self::DnsSdServiceAvailable,
    ];

    /// Channel identifier as the native layer spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeersUpdated => "PEERS_UPDATED",
            Self::ConnectionInfoUpdated => "CONNECTION_INFO_UPDATED",
            Self::ThisDeviceChanged => "THIS_DEVICE_CHANGED_ACTION",
            Self::DnsTxtRecordAvailable => "DNSTXTRECORDAVAILABLE",
            Self::DnsSdServiceAvailable => "DNSSDSERVICEAVAILABLE",
        }
    }

    /// Fully qualified event name, e.g. `WIFI_P2P:PEERS_UPDATED`.
    pub fn wire_name(self) -> String {
        qualify(self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Parse a fully qualified event name. Names with another prefix are rejected.
    pub fn from_wire_name(wire_name: &str) -> Option<Self> {
        let (prefix, name) = wire_name.split_once(EVENT_NAME_SEPARATOR)?;
        if prefix != MODULE_PREFIX {
            return None;
        }
        Self::from_name(name)
    }
}

impl fmt::Display for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Join the module prefix with a channel name.
pub fn qualify(name: &str) -> String {
    format!("{MODULE_PREFIX}{EVENT_NAME_SEPARATOR}{name}")
}
