//! # Error Types
//!
//! Defines the failure taxonomy shared by every subsystem and the errors of
//! the unit helpers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a rejected call.
///
/// Every subsystem error maps onto exactly one kind so monitors can tell a
/// caller mistake apart from a broken recipient or an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// Bad tier, expired deadline, wrong payment. Caller-correctable.
    Validation,
    /// Signature mismatch (caller or validator).
    Authorization,
    /// Requested share amount exceeds available supply.
    Capacity,
    /// A payout to a recipient failed.
    Transfer,
    /// Reentrant invocation. Always rejected, never queued.
    Concurrency,
    /// Raised by the host ledger itself (funding, overflow, encoding).
    Host,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::Capacity => "capacity",
            Self::Transfer => "transfer",
            Self::Concurrency => "concurrency",
            Self::Host => "host",
        };
        f.write_str(label)
    }
}

/// Errors from parsing decimal currency strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitError {
    /// Input was empty or contained something other than digits and one dot.
    #[error("invalid decimal amount: {0:?}")]
    InvalidFormat(String),

    /// More fractional digits than the 18-decimal scale can hold.
    #[error("too many decimal places: {places} > 18")]
    TooPrecise { places: usize },

    /// Value does not fit in 256 bits.
    #[error("amount overflows 256 bits")]
    Overflow,
}
