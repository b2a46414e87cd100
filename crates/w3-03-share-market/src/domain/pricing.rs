//! # Pricing
//!
//! Fixed-point price math. Multiply before divide, floor throughout.
//! Currency and shares both carry 18 fractional digits.

use serde::{Deserialize, Serialize};
use shared_types::{mul_div, U256, WAD};

/// Treasury value per whole share. Zero while no share exists.
///
/// Returns `None` if the result does not fit in 256 bits.
#[must_use]
pub fn share_value(treasury: U256, total_supply: U256) -> Option<U256> {
    if total_supply.is_zero() {
        return Some(U256::zero());
    }
    mul_div(treasury, WAD, total_supply)
}

/// Value of `amount` shares at `price` per whole share.
#[must_use]
pub fn value_of(amount: U256, price: U256) -> Option<U256> {
    mul_div(amount, price, WAD)
}

/// Supply still obtainable, split by origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Bought-back shares awaiting reissue.
    pub reserved_for_resale: U256,
    /// `max_supply - total_supply`
    pub publicly_mintable: U256,
}

impl Availability {
    /// Everything a buyer could get, `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<U256> {
        self.reserved_for_resale.checked_add(self.publicly_mintable)
    }
}

/// How a purchase is filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Reissued from the resale pool.
    pub from_reserve: U256,
    /// Newly minted.
    pub minted: U256,
}

/// Fill `amount` from the pool first, then from new supply.
///
/// Returns `None` if both together cannot cover `amount`.
#[must_use]
pub fn allocate(amount: U256, available: &Availability) -> Option<Allocation> {
    let from_reserve = amount.min(available.reserved_for_resale);
    let minted = amount - from_reserve;
    if minted > available.publicly_mintable {
        return None;
    }
    Some(Allocation {
        from_reserve,
        minted,
    })
}
