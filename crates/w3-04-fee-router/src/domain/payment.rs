//! # Payment Rules
//!
//! Shared by both schemas.

use crate::config::PriceTable;
use crate::domain::tiers::PREMIUM_TIER;
use crate::errors::FeeRouterError;
use shared_types::U256;

/// What a submission must pay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payment {
    /// Premium account on the premium tier.
    Waived,
    /// Exact amount due.
    Due(U256),
}

impl Payment {
    /// The amount that must be attached.
    #[must_use]
    pub fn amount(&self) -> U256 {
        match self {
            Self::Waived => U256::zero(),
            Self::Due(amount) => *amount,
        }
    }
}

/// Payment required for `tier`. Premium waives only the premium tier.
pub fn required_payment(
    table: &PriceTable,
    tier: u64,
    is_premium: bool,
) -> Result<Payment, FeeRouterError> {
    if tier == PREMIUM_TIER && is_premium {
        return Ok(Payment::Waived);
    }
    table
        .price_for(tier)
        .map(Payment::Due)
        .ok_or(FeeRouterError::InvalidTier)
}

/// The attached value must match exactly. A waived payment accepts only 0.
pub fn check_payment(required: Payment, value: U256) -> Result<(), FeeRouterError> {
    if value == required.amount() {
        Ok(())
    } else {
        Err(FeeRouterError::IncorrectPrice)
    }
}
