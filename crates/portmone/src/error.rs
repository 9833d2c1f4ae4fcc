//! Module fault taxonomy for the Portmone bridge

use hostbridge_core::CallError;
use thiserror::Error;

/// Result type alias for Portmone module operations
pub type ModuleResult<T> = std::result::Result<T, ModuleError>;

/// Faults a Portmone implementation can raise.
///
/// Each variant carries a stable numeric [`code`](ModuleError::code) the
/// host branches on; the codes are part of the module's contract and must
/// not be renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// No host surface is available to present the payment screen (code 1)
    #[error("no host surface available to present the payment screen")]
    PresentationUnavailable,

    /// Payment failed without error or bill information (code 2)
    #[error("payment failed with no error or bill information")]
    PaymentFailed,

    /// The payment screen was dismissed before completion (code 3)
    #[error("payment screen was dismissed")]
    PaymentDismissed,

    /// The user canceled the payment (code 4)
    #[error("payment was canceled by user")]
    PaymentCanceled,

    /// Parameters were rejected before reaching the payment provider (code 5)
    #[error("invalid payment parameters: {0}")]
    InvalidParameters(String),

    /// The payment provider reported an error (code 6)
    #[error("payment provider error: {0}")]
    Provider(String),
}

impl ModuleError {
    /// The stable numeric code for this fault.
    pub fn code(&self) -> i32 {
        match self {
            ModuleError::PresentationUnavailable => 1,
            ModuleError::PaymentFailed => 2,
            ModuleError::PaymentDismissed => 3,
            ModuleError::PaymentCanceled => 4,
            ModuleError::InvalidParameters(_) => 5,
            ModuleError::Provider(_) => 6,
        }
    }
}

impl From<ModuleError> for CallError {
    fn from(err: ModuleError) -> Self {
        CallError::Module {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
