//! # Domain Layer
//!
//! Tier rules, the premium registry and submissions. No ledger access.

pub mod payment;
pub mod premium;
pub mod submission;
pub mod tiers;
