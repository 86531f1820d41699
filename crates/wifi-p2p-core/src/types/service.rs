use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::device::Device;
use crate::constants::{SERVICE_INSTANCE, SERVICE_TYPE};

/// DNS-SD TXT record advertised by `start_service_registration`.
pub type ServiceRecord = BTreeMap<String, String>;

/// Payload of the DNS TXT record event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsTxtRecord {
    /// e.g. `_rnwifip2preborn._presence._tcp.local.`
    pub full_domain: String,
    #[serde(default)]
    pub record: ServiceRecord,
    pub device: Device,
}

impl DnsTxtRecord {
    /// Whether the record was published by another instance of this bridge.
    pub fn is_bridge_record(&self) -> bool {
        let domain = self.full_domain.to_ascii_lowercase();
        domain
            .strip_prefix(SERVICE_INSTANCE)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|rest| rest.starts_with(SERVICE_TYPE))
    }
}

/// Payload of the DNS-SD service event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsSdService {
    pub instance_name: String,
    pub registration_type: String,
    pub device: Device,
}

impl DnsSdService {
    /// Whether this service was advertised by another instance of this bridge.
    ///
    /// The platform reports the registration type with a domain suffix
    /// (`_presence._tcp.local.`), so only the prefix is compared.
    pub fn is_bridge_instance(&self) -> bool {
        self.instance_name.eq_ignore_ascii_case(SERVICE_INSTANCE)
            && self
                .registration_type
                .to_ascii_lowercase()
                .starts_with(SERVICE_TYPE)
    }
}
