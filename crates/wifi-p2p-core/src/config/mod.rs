pub mod event_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::NATIVE_MODULE_NAME;
use crate::errors::{BridgeError, BridgeResult};

pub use event_config::EventConfig;
pub use observability_config::ObservabilityConfig;

/// Top-level bridge configuration.
///
/// The wire-level event prefix and channel names are fixed and cannot be
/// configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiP2pConfig {
    /// Name of the native module; used in logs and in attributable errors.
    pub module_name: String,
    pub observability: ObservabilityConfig,
    pub events: EventConfig,
}

impl Default for WifiP2pConfig {
    fn default() -> Self {
        Self {
            module_name: NATIVE_MODULE_NAME.to_string(),
            observability: ObservabilityConfig::default(),
            events: EventConfig::default(),
        }
    }
}

impl WifiP2pConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> BridgeResult<Self> {
        toml::from_str(toml_str).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&raw)
    }

    pub fn to_toml(&self) -> BridgeResult<String> {
        toml::to_string(self).map_err(|e| BridgeError::Config(e.to_string()))
    }
}
