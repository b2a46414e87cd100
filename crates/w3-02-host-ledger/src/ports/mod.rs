//! # Ports Layer
//!
//! Traits implemented by code the ledger hosts.

pub mod outbound;
