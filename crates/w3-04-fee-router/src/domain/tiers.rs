//! # Tiers
//!
//! Discrete price/privilege classes.

use crate::config::SchemaVersion;

/// Only tier of the legacy schema.
pub const LEGACY_TIER: u64 = 1;

/// Paid on every submission.
pub const STANDARD_TIER: u64 = 2;

/// Paid once, then free for that account.
pub const PREMIUM_TIER: u64 = 3;

/// Tiers a schema accepts.
#[must_use]
pub fn valid_tiers(schema: SchemaVersion) -> &'static [u64] {
    match schema {
        SchemaVersion::Legacy => &[LEGACY_TIER],
        SchemaVersion::Dual => &[STANDARD_TIER, PREMIUM_TIER],
    }
}

#[must_use]
pub fn is_valid_tier(schema: SchemaVersion, tier: u64) -> bool {
    valid_tiers(schema).contains(&tier)
}
