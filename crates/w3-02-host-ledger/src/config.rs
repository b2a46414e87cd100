//! # Ledger Configuration
//!
//! Genesis parameters of the in-memory ledger.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Local development chain id.
pub const DEFAULT_CHAIN_ID: u64 = 31337;

/// Seconds between blocks when mining.
pub const DEFAULT_BLOCK_TIME_SECS: u64 = 12;

/// Ledger genesis configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Chain identity (EIP-155), bound into every typed-data digest.
    pub chain_id: u64,
    /// Height of the first block.
    pub genesis_height: u64,
    /// Unix timestamp of the first block.
    pub genesis_timestamp: u64,
    /// Timestamp advance per mined block.
    pub block_time_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            genesis_height: 0,
            genesis_timestamp: 1_700_000_000,
            block_time_secs: DEFAULT_BLOCK_TIME_SECS,
        }
    }
}

impl LedgerConfig {
    /// Validate genesis parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::ZeroChainId);
        }
        if self.block_time_secs == 0 {
            return Err(ConfigError::ZeroBlockTime);
        }
        Ok(())
    }

    /// Builder-style method to set the chain id
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Builder-style method to set the genesis height
    #[must_use]
    pub fn with_genesis_height(mut self, height: u64) -> Self {
        self.genesis_height = height;
        self
    }

    /// Builder-style method to set the genesis timestamp
    #[must_use]
    pub fn with_genesis_timestamp(mut self, timestamp: u64) -> Self {
        self.genesis_timestamp = timestamp;
        self
    }

    /// Builder-style method to set the block time
    #[must_use]
    pub fn with_block_time(mut self, secs: u64) -> Self {
        self.block_time_secs = secs;
        self
    }
}
