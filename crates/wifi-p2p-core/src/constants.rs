//! Fixed identifiers shared with the native module.

/// Prefix joined with a channel name to build the wire-level event name.
pub const MODULE_PREFIX: &str = "WIFI_P2P";

/// Separator between [`MODULE_PREFIX`] and the channel name.
pub const EVENT_NAME_SEPARATOR: char = ':';

/// Name the native module registers itself under.
pub const NATIVE_MODULE_NAME: &str = "WiFiP2PManagerModule";

/// DNS-SD instance name used by service registration and discovery.
pub const SERVICE_INSTANCE: &str = "_rnwifip2preborn";

/// DNS-SD service type used by service registration and discovery.
pub const SERVICE_TYPE: &str = "_presence._tcp";

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "WIFI_P2P_LOG";
