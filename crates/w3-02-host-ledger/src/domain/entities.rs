//! # Core Domain Entities
//!
//! What a hosted contract can observe about the call it is serving and the
//! block it runs in.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use std::collections::HashMap;

// =============================================================================
// BLOCK CONTEXT
// =============================================================================

/// Block-level information visible during execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Block height.
    pub height: u64,
    /// Block timestamp (unix seconds).
    pub timestamp: u64,
    /// Chain ID (EIP-155).
    pub chain_id: u64,
}

// =============================================================================
// CALL
// =============================================================================

/// An entry-point invocation: who is calling and how much native value the
/// call carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Immediate caller identity.
    pub caller: Address,
    /// Attached native value (wei).
    pub value: U256,
}

impl Call {
    /// A call carrying `value`.
    #[must_use]
    pub fn new(caller: Address, value: U256) -> Self {
        Self { caller, value }
    }

    /// A call carrying no value.
    #[must_use]
    pub fn unpaid(caller: Address) -> Self {
        Self {
            caller,
            value: U256::zero(),
        }
    }

    /// Same caller, different value.
    #[must_use]
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }
}

// =============================================================================
// DELIVERY
// =============================================================================

/// A value transfer handed to receiver code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Paying account.
    pub from: Address,
    /// Receiving account (the receiver code's own address).
    pub to: Address,
    /// Amount moved.
    pub amount: U256,
}

// =============================================================================
// LOG ENTRY
// =============================================================================

/// One emitted event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Contract that emitted the event.
    pub emitter: Address,
    /// Event name, e.g. `"Signer"`.
    pub name: String,
    /// Height at emission.
    pub height: u64,
    /// Event fields.
    pub data: serde_json::Value,
}

// =============================================================================
// CHECKPOINT
// =============================================================================

/// Ledger state captured before a call so it can be restored on failure.
#[derive(Clone, Debug)]
pub struct Checkpoint {
    pub(crate) balances: HashMap<Address, U256>,
    pub(crate) nonces: HashMap<Address, u64>,
    pub(crate) log_len: usize,
}
