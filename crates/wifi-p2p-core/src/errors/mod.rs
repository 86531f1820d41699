mod bridge_error;
pub mod error_code;
mod reason_code;
pub mod recovery;

pub use bridge_error::{BridgeError, BridgeResult};
pub use reason_code::{get_error, normalize, NormalizedError, ReasonCode, UNKNOWN_REASON_MESSAGE};
pub use recovery::RecoveryAction;
