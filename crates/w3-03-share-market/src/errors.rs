//! # Error Types
//!
//! Every variant renders as the stable reason a client matches on.

use crate::config::ConfigError;
use shared_types::FailureKind;
use thiserror::Error;
use w3_02_host_ledger::LedgerError;

/// Share market errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareMarketError {
    /// Attached value is zero or differs from the required payment.
    #[error("Invalid amount of ether")]
    InvalidPayment,

    /// More shares requested than the pool and the cap leave.
    #[error("Amount exceeding available supply")]
    SupplyExceeded,

    /// The payout recipient rejected the value.
    #[error("Failed to send Ether")]
    TransferFailed,

    /// Selling before the vesting deadline.
    #[error("Vesting period is not over")]
    VestingNotElapsed,

    /// Selling more shares than the caller holds.
    #[error("Insufficient Balance")]
    InsufficientBalance,

    /// Nested buy/sell while one is in flight.
    #[error("ReentrancyGuard: reentrant call")]
    Reentrant,

    /// Share transfer larger than the sender's balance.
    #[error("ERC20: transfer amount exceeds balance")]
    TransferExceedsBalance,

    /// `transfer_from` beyond the approved allowance.
    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance,

    /// Share transfer to the zero address.
    #[error("ERC20: transfer to the zero address")]
    TransferToZeroAddress,

    /// Approval for the zero address.
    #[error("ERC20: approve to the zero address")]
    ApproveToZeroAddress,

    /// A checked 256-bit operation overflowed.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Construction parameters were rejected.
    #[error("Invalid share market config: {0}")]
    Config(#[from] ConfigError),

    /// Raised by the host ledger.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ShareMarketError {
    /// Failure class for monitoring.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidPayment
            | Self::VestingNotElapsed
            | Self::InsufficientBalance
            | Self::TransferExceedsBalance
            | Self::InsufficientAllowance
            | Self::TransferToZeroAddress
            | Self::ApproveToZeroAddress
            | Self::Config(_) => FailureKind::Validation,
            Self::SupplyExceeded => FailureKind::Capacity,
            Self::TransferFailed => FailureKind::Transfer,
            Self::Reentrant => FailureKind::Concurrency,
            Self::Overflow => FailureKind::Host,
            Self::Ledger(e) => e.kind(),
        }
    }

    /// Map a failed payout. A rejecting recipient surfaces as `TransferFailed`.
    pub(crate) fn from_payout(error: LedgerError) -> Self {
        match error {
            LedgerError::TransferRejected { .. } => Self::TransferFailed,
            other => Self::Ledger(other),
        }
    }
}
