//! # Event Schema
//!
//! Events the share market writes to the ledger log.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use w3_02_host_ledger::LedgerEvent;

/// Shares moved. `from == ZERO` is a mint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

impl LedgerEvent for Transfer {
    const NAME: &'static str = "Transfer";
}

/// Allowance set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
}

impl LedgerEvent for Approval {
    const NAME: &'static str = "Approval";
}

/// A completed `buy_shares`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharesPurchased {
    pub buyer: Address,
    pub amount: U256,
    /// Value paid (wei).
    pub paid: U256,
    /// Portion reissued from the resale pool.
    pub from_reserve: U256,
    /// Portion newly minted.
    pub minted: U256,
}

impl LedgerEvent for SharesPurchased {
    const NAME: &'static str = "SharesPurchased";
}

/// A completed `sell_shares`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharesRedeemed {
    pub seller: Address,
    pub amount: U256,
    /// Value paid out (wei).
    pub payout: U256,
}

impl LedgerEvent for SharesRedeemed {
    const NAME: &'static str = "SharesRedeemed";
}
