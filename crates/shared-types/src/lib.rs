//! # Shared Types Crate
//!
//! Value objects used by every W3-Board subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identities, digests and amounts are defined
//!   here once and re-used by the signature authority, the host ledger, the
//!   share market and the fee router.
//! - **Exact Arithmetic**: all currency and share amounts are unsigned
//!   256-bit integers scaled by [`units::WAD`] (`10^18`). Nothing in the
//!   workspace uses floating point for value.

pub mod entities;
pub mod errors;
pub mod units;

pub use entities::*;
pub use errors::*;
pub use units::{format_ether, mul_div, parse_ether, WAD};
