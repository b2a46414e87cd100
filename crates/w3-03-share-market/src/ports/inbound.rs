//! # Inbound Ports (Driving Ports / API)
//!
//! Entry points take the host ledger explicitly and describe the invocation
//! with a [`Call`]. State-changing entry points are atomic.

use crate::domain::pricing::{Allocation, Availability};
use crate::errors::ShareMarketError;
use shared_types::{Address, U256};
use w3_02_host_ledger::{Call, Ledger};

/// Market operations: pricing, buying and selling shares.
pub trait ShareMarketApi {
    /// Treasury value per whole share; 0 while no share exists.
    fn current_share_value(&self, ledger: &Ledger) -> Result<U256, ShareMarketError>;

    /// Supply obtainable right now, split by origin.
    fn available_shares(&self) -> Availability;

    /// Price a buyer pays per whole share at the current height.
    fn price_per_share(&self, ledger: &Ledger) -> Result<U256, ShareMarketError>;

    /// Buy `amount` shares for exactly the attached value.
    ///
    /// Reissues from the resale pool before minting.
    fn buy_shares(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        amount: U256,
    ) -> Result<Allocation, ShareMarketError>;

    /// Redeem `amount` shares for their treasury value. Returns the payout.
    fn sell_shares(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        amount: U256,
    ) -> Result<U256, ShareMarketError>;
}

/// ERC-20 style share ledger operations.
pub trait ShareTokenApi {
    fn name(&self) -> &str;
    fn symbol(&self) -> &str;
    fn decimals(&self) -> u8;
    fn total_supply(&self) -> U256;
    fn max_supply(&self) -> U256;
    fn balance_of(&self, account: &Address) -> U256;
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;

    /// Set the caller's allowance for `spender`.
    fn approve(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        spender: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError>;

    /// Move the caller's shares.
    fn transfer(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        to: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError>;

    /// Move `from`'s shares using the caller's allowance.
    fn transfer_from(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError>;
}
