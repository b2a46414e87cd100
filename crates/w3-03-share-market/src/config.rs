//! # Share Market Configuration
//!
//! Construction parameters. Every field is fixed once the market is deployed.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256, WAD};
use thiserror::Error;

/// Blocks before secondary-market selling opens (about 90 days of 3s blocks).
pub const DEFAULT_VESTING_PERIOD: u64 = 2_598_800;

/// Where the value paid for shares goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyProceeds {
    /// Kept by the market as treasury.
    #[default]
    Treasury,
    /// Delivered to the owner on every purchase.
    Owner,
}

/// Share market configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMarketConfig {
    /// ERC-20 name.
    pub token_name: String,
    /// ERC-20 symbol.
    pub token_symbol: String,
    /// Signing domain of the board this market belongs to, if any.
    pub domain_name: Option<String>,
    /// Hard cap on `totalSupply` (base units).
    pub max_supply: U256,
    /// Price per whole share before the vesting deadline (wei).
    pub initial_price_per_share: U256,
    /// Shares minted to the owner at construction (base units).
    pub private_sale_amount: U256,
    /// Vesting length in block heights.
    pub vesting_period: u64,
    /// Receives the private sale.
    pub owner: Address,
    /// Destination of purchase payments.
    pub buy_proceeds: BuyProceeds,
}

impl Default for ShareMarketConfig {
    fn default() -> Self {
        Self {
            token_name: "WWW3 Shares".to_string(),
            token_symbol: "W3S".to_string(),
            domain_name: None,
            max_supply: WAD * U256::from(5_000_000u64),
            // 0.0006 ether
            initial_price_per_share: U256::from(600_000_000_000_000u64),
            private_sale_amount: WAD * U256::from(1_500_000u64),
            vesting_period: DEFAULT_VESTING_PERIOD,
            owner: Address::ZERO,
            buy_proceeds: BuyProceeds::Treasury,
        }
    }
}

impl ShareMarketConfig {
    /// Default parameters owned by `owner`.
    #[must_use]
    pub fn for_owner(owner: Address) -> Self {
        Self::default().with_owner(owner)
    }

    /// Validate construction parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.is_zero() {
            return Err(ConfigError::ZeroOwner);
        }
        if self.max_supply.is_zero() {
            return Err(ConfigError::ZeroMaxSupply);
        }
        if self.private_sale_amount > self.max_supply {
            return Err(ConfigError::PrivateSaleExceedsMax {
                private_sale: self.private_sale_amount,
                max_supply: self.max_supply,
            });
        }
        if self.initial_price_per_share.is_zero() {
            return Err(ConfigError::ZeroInitialPrice);
        }
        Ok(())
    }

    /// Builder-style method to set the token name and symbol
    #[must_use]
    pub fn with_token(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.token_name = name.into();
        self.token_symbol = symbol.into();
        self
    }

    /// Builder-style method to set the signing domain
    #[must_use]
    pub fn with_domain_name(mut self, domain: impl Into<String>) -> Self {
        self.domain_name = Some(domain.into());
        self
    }

    /// Builder-style method to set the supply cap
    #[must_use]
    pub fn with_max_supply(mut self, max_supply: U256) -> Self {
        self.max_supply = max_supply;
        self
    }

    /// Builder-style method to set the pre-vesting price
    #[must_use]
    pub fn with_initial_price(mut self, price: U256) -> Self {
        self.initial_price_per_share = price;
        self
    }

    /// Builder-style method to set the private sale
    #[must_use]
    pub fn with_private_sale(mut self, amount: U256) -> Self {
        self.private_sale_amount = amount;
        self
    }

    /// Builder-style method to set the vesting period
    #[must_use]
    pub fn with_vesting_period(mut self, blocks: u64) -> Self {
        self.vesting_period = blocks;
        self
    }

    /// Builder-style method to set where purchase payments go
    #[must_use]
    pub fn with_buy_proceeds(mut self, proceeds: BuyProceeds) -> Self {
        self.buy_proceeds = proceeds;
        self
    }

    /// Builder-style method to set the owner
    #[must_use]
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }
}

/// Rejected construction parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The owner would be unreachable.
    #[error("owner cannot be the zero address")]
    ZeroOwner,

    /// No share could ever exist.
    #[error("max_supply cannot be 0")]
    ZeroMaxSupply,

    /// Private sale larger than the cap.
    #[error("private sale {private_sale} exceeds max supply {max_supply}")]
    PrivateSaleExceedsMax { private_sale: U256, max_supply: U256 },

    /// Shares would be free before vesting.
    #[error("initial_price_per_share cannot be 0")]
    ZeroInitialPrice,
}
