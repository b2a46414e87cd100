//! # Event Schema

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use w3_01_signature_authority::RawSignature;
use w3_02_host_ledger::LedgerEvent;

/// Emitted for every accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub caller: Address,
    pub tier: u64,
    /// The caller's signature, hex encoded.
    pub signature: RawSignature,
}

impl LedgerEvent for Signer {
    const NAME: &'static str = "Signer";
}

/// An account became premium.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumGranted {
    pub account: Address,
}

impl LedgerEvent for PremiumGranted {
    const NAME: &'static str = "PremiumGranted";
}

/// Retained proceeds left the router.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceedsWithdrawn {
    pub to: Address,
    pub amount: U256,
}

impl LedgerEvent for ProceedsWithdrawn {
    const NAME: &'static str = "ProceedsWithdrawn";
}
