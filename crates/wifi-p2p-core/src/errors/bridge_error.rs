//! Bridge error types.

use thiserror::Error;

use super::error_code::{self, WifiP2pErrorCode};
use super::reason_code::NormalizedError;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// A wrapped native action completed with a reason code.
    #[error("Native failure: {0}")]
    Native(#[from] NormalizedError),

    /// A native future rejected on its own terms (pass-through operations).
    #[error("Native rejection [{code}]: {message}")]
    NativeRejected { code: String, message: String },

    /// The native layer dropped a completion callback without invoking it.
    #[error("Completion for {operation} was dropped before it fired")]
    CompletionDropped { operation: &'static str },

    #[error("Event source unavailable: native module {module} exposes no emitter")]
    EventSourceUnavailable { module: String },

    #[error("Native module {module} is not linked")]
    NotLinked { module: String },

    #[error("Native module {module} is already linked")]
    AlreadyLinked { module: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Convenience constructor for native implementations rejecting a future.
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NativeRejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The normalized reason, when this is a reason-code failure.
    pub fn as_native(&self) -> Option<&NormalizedError> {
        match self {
            Self::Native(e) => Some(e),
            _ => None,
        }
    }
}

impl WifiP2pErrorCode for BridgeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Native(_) => error_code::NATIVE_FAILURE,
            Self::NativeRejected { .. } => error_code::NATIVE_REJECTED,
            Self::CompletionDropped { .. } => error_code::COMPLETION_DROPPED,
            Self::EventSourceUnavailable { .. } => error_code::EVENT_SOURCE_UNAVAILABLE,
            Self::NotLinked { .. } => error_code::NOT_LINKED,
            Self::AlreadyLinked { .. } => error_code::ALREADY_LINKED,
            Self::Config(_) => error_code::CONFIG_ERROR,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
