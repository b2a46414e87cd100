//! # Share Market (W3-03)
//!
//! A revenue-share token sold against an accumulated treasury.
//!
//! ## Pricing
//!
//! Before the vesting deadline every share costs the fixed initial price.
//! From the deadline on, the price is the treasury's value per share:
//!
//! ```text
//! shareValue = floor(treasury * 10^18 / totalSupply)    (0 when totalSupply == 0)
//! ```
//!
//! The treasury is the market's own native balance. Message fees routed in
//! by the fee router, plain deposits and share purchases all grow it; share
//! redemptions are paid out of it.
//!
//! ## Inventory
//!
//! Redeemed shares are not burned. They move into the reserved-for-resale
//! pool (the market's own share balance) and are reissued before any new
//! share is minted, so `totalSupply` only grows when the pool is empty.
//!
//! ## Safety
//!
//! - Every entry point is atomic: a failed call leaves no trace
//! - Share balances move before any payout is attempted
//! - A busy flag rejects nested `buy_shares`/`sell_shares`

pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod guard;
pub mod ports;
pub mod service;

pub use config::{BuyProceeds, ConfigError, ShareMarketConfig};
pub use domain::invariants::{InvariantCheckResult, InvariantViolation};
pub use domain::pricing::{Allocation, Availability};
pub use domain::share_ledger::ShareLedger;
pub use errors::ShareMarketError;
pub use events::{Approval, SharesPurchased, SharesRedeemed, Transfer};
pub use ports::inbound::{ShareMarketApi, ShareTokenApi};
pub use service::ShareMarket;
