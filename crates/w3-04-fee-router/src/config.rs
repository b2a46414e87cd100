//! # Fee Router Configuration
//!
//! Domain identity, validator, schema, proceeds route and the price table.

use crate::domain::tiers::{LEGACY_TIER, PREMIUM_TIER, STANDARD_TIER};
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use std::collections::BTreeMap;
use thiserror::Error;

/// Submission schema a router serves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Tier 1, caller signature only.
    Legacy,
    /// Tiers 2 and 3, caller and validator signatures.
    #[default]
    Dual,
}

/// What happens to accepted fees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProceedsRoute {
    /// Deliver to this account (the share market).
    Forward(Address),
    /// Keep in the router until the owner withdraws.
    Retain,
}

/// Price per tier (wei).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: BTreeMap<u64, U256>,
}

impl Default for PriceTable {
    fn default() -> Self {
        // 0.003 ether
        let standard = U256::from(3_000_000_000_000_000u64);
        // 0.03 ether
        let premium = U256::from(30_000_000_000_000_000u64);
        Self::empty()
            .with_price(LEGACY_TIER, standard)
            .with_price(STANDARD_TIER, standard)
            .with_price(PREMIUM_TIER, premium)
    }
}

impl PriceTable {
    /// Table with no tier priced.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    /// Builder-style method to price a tier
    #[must_use]
    pub fn with_price(mut self, tier: u64, price: U256) -> Self {
        self.prices.insert(tier, price);
        self
    }

    /// Price of `tier`, if priced.
    #[must_use]
    pub fn price_for(&self, tier: u64) -> Option<U256> {
        self.prices.get(&tier).copied()
    }
}

/// Fee router configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRouterConfig {
    /// Typed-data domain name.
    pub domain_name: String,
    /// Typed-data domain version.
    pub domain_version: String,
    /// Identity that co-signs every dual submission.
    pub validator: Address,
    /// May withdraw retained proceeds.
    pub owner: Address,
    /// Served schema.
    pub schema: SchemaVersion,
    /// Fee destination.
    pub proceeds: ProceedsRoute,
    /// Tier prices.
    pub price_table: PriceTable,
}

impl Default for FeeRouterConfig {
    fn default() -> Self {
        Self {
            domain_name: "idecentralize".to_string(),
            domain_version: "1".to_string(),
            validator: Address::ZERO,
            owner: Address::ZERO,
            schema: SchemaVersion::Dual,
            proceeds: ProceedsRoute::Retain,
            price_table: PriceTable::default(),
        }
    }
}

impl FeeRouterConfig {
    /// Current deployment: dual signatures, fees forwarded to `share_market`.
    #[must_use]
    pub fn dual(validator: Address, owner: Address, share_market: Address) -> Self {
        Self {
            validator,
            owner,
            schema: SchemaVersion::Dual,
            proceeds: ProceedsRoute::Forward(share_market),
            ..Self::default()
        }
    }

    /// Older deployment: caller signature only, fees retained for `owner`.
    #[must_use]
    pub fn legacy(owner: Address) -> Self {
        Self {
            owner,
            schema: SchemaVersion::Legacy,
            proceeds: ProceedsRoute::Retain,
            ..Self::default()
        }
    }

    /// Validate the configuration for its schema.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::ZeroOwner);
        }
        if let ProceedsRoute::Forward(to) = self.proceeds {
            if to.is_zero() {
                return Err(ConfigError::ZeroProceedsRecipient);
            }
        }

        match self.schema {
            SchemaVersion::Dual => {
                if self.validator.is_zero() {
                    return Err(ConfigError::ZeroValidator);
                }
                if self.proceeds == ProceedsRoute::Retain {
                    return Err(ConfigError::DualRequiresForward);
                }
                for tier in [STANDARD_TIER, PREMIUM_TIER] {
                    if self.price_table.price_for(tier).is_none() {
                        return Err(ConfigError::UnpricedTier(tier));
                    }
                }
            }
            SchemaVersion::Legacy => {
                if self.price_table.price_for(LEGACY_TIER).is_none() {
                    return Err(ConfigError::UnpricedTier(LEGACY_TIER));
                }
            }
        }
        Ok(())
    }

    /// Builder-style method to set the typed-data domain
    #[must_use]
    pub fn with_domain(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.domain_name = name.into();
        self.domain_version = version.into();
        self
    }

    /// Builder-style method to set the price table
    #[must_use]
    pub fn with_price_table(mut self, table: PriceTable) -> Self {
        self.price_table = table;
        self
    }

    /// Builder-style method to set the proceeds route
    #[must_use]
    pub fn with_proceeds(mut self, proceeds: ProceedsRoute) -> Self {
        self.proceeds = proceeds;
        self
    }
}

/// Rejected router configuration.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("owner cannot be the zero address")]
    ZeroOwner,

    #[error("validator cannot be the zero address")]
    ZeroValidator,

    #[error("proceeds recipient cannot be the zero address")]
    ZeroProceedsRecipient,

    #[error("dual schema must forward proceeds to a share market")]
    DualRequiresForward,

    #[error("tier {0} has no price")]
    UnpricedTier(u64),
}
