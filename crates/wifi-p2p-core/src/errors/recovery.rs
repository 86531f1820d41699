//! RecoveryAction enum: what a caller should do when a bridge operation fails.
//!
//! Advisory only. The bridge itself never retries.

use std::fmt;

use super::{BridgeError, ReasonCode};

/// Recommended recovery action for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Retry the operation (transient failure like BUSY).
    Retry,
    /// Fall back to a degraded but functional alternative.
    Fallback,
    /// Escalate to the caller; this error cannot be handled silently.
    Escalate,
    /// Ignore the error.
    Ignore,
}

impl RecoveryAction {
    /// Determine the recommended recovery action for a BridgeError.
    pub fn for_error(error: &BridgeError) -> Self {
        match error {
            BridgeError::Native(e) => Self::for_reason(e.code),

            // Native promise rejections carry no taxonomy we can inspect.
            BridgeError::NativeRejected { .. } => Self::Escalate,

            // The native side lost our callback; a new call gets a new one.
            BridgeError::CompletionDropped { .. } => Self::Retry,

            // Subscriptions cannot work at all: run without events.
            BridgeError::EventSourceUnavailable { .. } => Self::Fallback,
            BridgeError::NotLinked { .. } => Self::Fallback,

            // Linking twice is harmless; the first bridge stays in place.
            BridgeError::AlreadyLinked { .. } => Self::Ignore,

            BridgeError::Config(_) => Self::Escalate,
            BridgeError::Serialization(_) => Self::Escalate,
            BridgeError::Io(_) => Self::Escalate,
        }
    }

    /// Recovery for a raw native reason code.
    pub fn for_reason(code: ReasonCode) -> Self {
        match code {
            ReasonCode::BUSY => Self::Retry,
            ReasonCode::P2P_UNSUPPORTED => Self::Fallback,
            // ERROR, NO_SERVICE_REQUESTS and unknown codes need caller action.
            _ => Self::Escalate,
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retry => write!(f, "Retry"),
            Self::Fallback => write!(f, "Fallback"),
            Self::Escalate => write!(f, "Escalate"),
            Self::Ignore => write!(f, "Ignore"),
        }
    }
}
