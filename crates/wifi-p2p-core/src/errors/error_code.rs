//! Stable error code strings for callers that match on errors across a boundary.

pub const NATIVE_FAILURE: &str = "NATIVE_FAILURE";
pub const NATIVE_REJECTED: &str = "NATIVE_REJECTED";
pub const COMPLETION_DROPPED: &str = "COMPLETION_DROPPED";
pub const EVENT_SOURCE_UNAVAILABLE: &str = "EVENT_SOURCE_UNAVAILABLE";
pub const NOT_LINKED: &str = "NOT_LINKED";
pub const ALREADY_LINKED: &str = "ALREADY_LINKED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";

/// Every bridge error exposes a stable code string.
pub trait WifiP2pErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, the format used when errors cross into logs or other runtimes.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
