//! Reason-code normalization.
//!
//! The native layer reports a failed action as a bare integer. This module maps
//! that integer onto a [`NormalizedError`] with a stable, human-readable message.
//! Codes missing from the table keep their raw value and get
//! [`UNKNOWN_REASON_MESSAGE`], since the raw code is the only diagnostic the
//! native side gives us.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message used for codes that are not in the lookup table.
pub const UNKNOWN_REASON_MESSAGE: &str = "UNKNOWN_ERROR";

/// Failure reasons reported by the platform's WiFi P2P manager.
const REASONS: &[(i32, &str)] = &[
    (0, "ERROR"),
    (1, "P2P_UNSUPPORTED"),
    (2, "BUSY"),
    (3, "NO_SERVICE_REQUESTS"),
];

/// Raw failure code delivered to a native completion callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReasonCode(pub i32);

impl ReasonCode {
    /// Internal error on the native side.
    pub const ERROR: Self = Self(0);
    /// WiFi P2P is not supported on this device.
    pub const P2P_UNSUPPORTED: Self = Self(1);
    /// The framework is busy and cannot service the request.
    pub const BUSY: Self = Self(2);
    /// Service discovery was started without any service request.
    pub const NO_SERVICE_REQUESTS: Self = Self(3);

    pub fn value(self) -> i32 {
        self.0
    }

    /// Table message for this code, or [`UNKNOWN_REASON_MESSAGE`].
    pub fn message(self) -> &'static str {
        REASONS
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, message)| *message)
            .unwrap_or(UNKNOWN_REASON_MESSAGE)
    }

    /// Whether this code is in the lookup table.
    pub fn is_known(self) -> bool {
        REASONS.iter().any(|(code, _)| *code == self.0)
    }

    /// All codes in the lookup table.
    pub fn known() -> impl Iterator<Item = ReasonCode> {
        REASONS.iter().map(|(code, _)| ReasonCode(*code))
    }
}

impl From<i32> for ReasonCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A native failure with its message resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (reason code {code})")]
pub struct NormalizedError {
    pub code: ReasonCode,
    pub message: String,
}

impl NormalizedError {
    pub fn is_known(&self) -> bool {
        self.code.is_known()
    }
}

/// Normalize a reason code. Never fails; unknown codes get the fallback message.
pub fn get_error(code: impl Into<ReasonCode>) -> NormalizedError {
    let code = code.into();
    NormalizedError {
        code,
        message: code.message().to_string(),
    }
}

/// Normalize the argument of a native completion callback.
///
/// `None` is the success sentinel and produces no error.
pub fn normalize(code: Option<i32>) -> Option<NormalizedError> {
    code.map(get_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sentinel_has_no_error() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_known_codes_map_to_table_messages() {
        assert_eq!(get_error(0).message, "ERROR");
        assert_eq!(get_error(1).message, "P2P_UNSUPPORTED");
        assert_eq!(get_error(2).message, "BUSY");
        assert_eq!(get_error(3).message, "NO_SERVICE_REQUESTS");
    }

    #[test]
    fn test_unknown_code_keeps_raw_value() {
        let err = get_error(42);
        assert_eq!(err.code, ReasonCode(42));
        assert_eq!(err.message, UNKNOWN_REASON_MESSAGE);
        assert!(!err.is_known());
    }

    #[test]
    fn test_negative_code_is_unknown() {
        let err = normalize(Some(-1)).unwrap();
        assert_eq!(err.code.value(), -1);
        assert_eq!(err.message, UNKNOWN_REASON_MESSAGE);
    }

    #[test]
    fn test_display_includes_code() {
        let err = get_error(ReasonCode::BUSY);
        assert_eq!(err.to_string(), "BUSY (reason code 2)");
    }

    #[test]
    fn test_serializes_as_code_and_message() {
        let json = serde_json::to_value(get_error(0)).unwrap();
        assert_eq!(json, serde_json::json!({ "code": 0, "message": "ERROR" }));
    }

    #[test]
    fn test_known_iterates_whole_table() {
        assert_eq!(ReasonCode::known().count(), 4);
        assert!(ReasonCode::known().all(ReasonCode::is_known));
    }
}
