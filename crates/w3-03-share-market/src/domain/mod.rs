//! # Domain Layer
//!
//! Share bookkeeping and price math. No access to the host ledger.

pub mod invariants;
pub mod pricing;
pub mod share_ledger;
