//! # Error Types
//!
//! Failures raised by the ledger itself.

use shared_types::{Address, FailureKind, U256};
use thiserror::Error;

/// Errors from ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The sender cannot cover the amount being moved.
    #[error("Insufficient funds: {account:?} has {available}, needs {required}")]
    InsufficientFunds {
        account: Address,
        required: U256,
        available: U256,
    },

    /// Receiver code refused an incoming value.
    #[error("Transfer rejected by {to:?}: {reason}")]
    TransferRejected { to: Address, reason: String },

    /// A balance would exceed 256 bits.
    #[error("Arithmetic overflow")]
    Overflow,

    /// An event could not be encoded or decoded.
    #[error("Event encoding failed: {0}")]
    EventEncoding(String),

    /// Genesis parameters were rejected.
    #[error("Invalid ledger config: {0}")]
    Config(#[from] ConfigError),
}

impl LedgerError {
    /// Failure class for monitoring.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::TransferRejected { .. } => FailureKind::Transfer,
            _ => FailureKind::Host,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        Self::EventEncoding(e.to_string())
    }
}

/// Rejected genesis parameters.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Chain id 0 is reserved.
    #[error("chain_id cannot be 0")]
    ZeroChainId,

    /// Mining would not advance time.
    #[error("block_time_secs cannot be 0")]
    ZeroBlockTime,
}
