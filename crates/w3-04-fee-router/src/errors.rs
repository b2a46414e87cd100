//! # Error Types
//!
//! Every variant renders as the stable reason a client matches on.

use crate::config::ConfigError;
use shared_types::FailureKind;
use thiserror::Error;
use w3_02_host_ledger::LedgerError;

/// Fee router errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeeRouterError {
    #[error("Passed the deadline")]
    DeadlineExpired,

    #[error("invalid tier")]
    InvalidTier,

    /// Caller signature does not recover to the caller.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Validator signature does not recover to the configured validator.
    #[error("Invalid validator signature")]
    InvalidValidatorSignature,

    /// Attached value differs from the tier price (or is nonzero when waived).
    #[error("Incorrect price for tier")]
    IncorrectPrice,

    /// The proceeds recipient rejected the value.
    #[error("Failed to send Ether")]
    TransferFailed,

    /// Submission schema differs from the router's.
    #[error("Unsupported submission schema")]
    UnsupportedSchema,

    #[error("Ownable: caller is not the owner")]
    NotOwner,

    #[error("Invalid fee router config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl FeeRouterError {
    /// Failure class for monitoring.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DeadlineExpired
            | Self::InvalidTier
            | Self::IncorrectPrice
            | Self::UnsupportedSchema
            | Self::Config(_) => FailureKind::Validation,
            Self::InvalidSignature | Self::InvalidValidatorSignature | Self::NotOwner => {
                FailureKind::Authorization
            }
            Self::TransferFailed => FailureKind::Transfer,
            Self::Ledger(e) => e.kind(),
        }
    }

    /// Map a failed delivery. A rejecting recipient surfaces as `TransferFailed`.
    pub(crate) fn from_delivery(error: LedgerError) -> Self {
        match error {
            LedgerError::TransferRejected { .. } => Self::TransferFailed,
            other => Self::Ledger(other),
        }
    }
}
