//! # Fee Router (W3-04)
//!
//! Accepts paid message submissions and routes the fees.
//!
//! ## Validation Pipeline
//!
//! | Step | Check | Failure |
//! |------|-------|---------|
//! | 1 | Submission schema matches the router | `Unsupported submission schema` |
//! | 2 | `timestamp <= deadline` | `Passed the deadline` |
//! | 3 | Tier valid for the schema | `invalid tier` |
//! | 4 | Caller signature recovers to the caller | `Invalid signature` |
//! | 5 | Validator signature recovers to the validator | `Invalid validator signature` |
//! | 6 | Attached value equals the tier price (0 if waived) | `Incorrect price for tier` |
//! | 7 | Proceeds delivered to the share market | `Failed to send Ether` |
//!
//! Accepted submissions emit `Signer(caller, tier, signature)`.
//!
//! ## Premium Accounts
//!
//! The first correctly priced tier-3 submission makes the caller a premium
//! account. Premium is permanent; every later tier-3 submission from that
//! account is free. Replaying an identical signed tier-3 submission is
//! allowed and costs nothing.
//!
//! ## Schemas
//!
//! A router serves one schema. `Dual` (tiers 2 and 3, caller and validator
//! signatures, proceeds forwarded to the share market) is current. `Legacy`
//! (tier 1, caller signature only, proceeds retained for the owner) is kept
//! for older boards.

pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

pub use config::{ConfigError, FeeRouterConfig, PriceTable, ProceedsRoute, SchemaVersion};
pub use domain::premium::PremiumRegistry;
pub use domain::submission::{Submission, SubmissionReceipt};
pub use domain::tiers::{LEGACY_TIER, PREMIUM_TIER, STANDARD_TIER};
pub use errors::FeeRouterError;
pub use events::{PremiumGranted, ProceedsWithdrawn, Signer};
pub use ports::inbound::FeeRouterApi;
pub use service::FeeRouter;
