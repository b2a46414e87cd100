//! # Share Ledger
//!
//! Balances, allowances and supply of the share token. Pure bookkeeping with
//! no access to native value.
//!
//! Accounts materialize on first credit and are never removed; a zero
//! balance is a valid resting state.

use crate::errors::ShareMarketError;
use shared_types::{Address, U256};
use std::collections::{BTreeMap, HashMap};

/// Share balances and supply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    total_supply: U256,
    max_supply: U256,
}

impl ShareLedger {
    /// Empty ledger capped at `max_supply`.
    #[must_use]
    pub fn new(max_supply: U256) -> Self {
        Self {
            max_supply,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    #[must_use]
    pub fn max_supply(&self) -> U256 {
        self.max_supply
    }

    /// `max_supply - total_supply`
    #[must_use]
    pub fn mintable(&self) -> U256 {
        self.max_supply.saturating_sub(self.total_supply)
    }

    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Every account ever credited, in address order.
    pub fn accounts(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Create `amount` new shares for `to`.
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), ShareMarketError> {
        if amount > self.mintable() {
            return Err(ShareMarketError::SupplyExceeded);
        }
        let balance = self.balance_of(&to);
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(ShareMarketError::Overflow)?;
        self.balances.insert(to, balance.checked_add(amount).ok_or(ShareMarketError::Overflow)?);
        Ok(())
    }

    /// Move shares between accounts. Supply is unchanged.
    pub fn move_shares(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        if to.is_zero() {
            return Err(ShareMarketError::TransferToZeroAddress);
        }
        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(ShareMarketError::TransferExceedsBalance);
        }
        self.balances.insert(from, from_balance - amount);
        let to_balance = self.balance_of(&to);
        self.balances
            .insert(to, to_balance.checked_add(amount).ok_or(ShareMarketError::Overflow)?);
        Ok(())
    }

    /// Set `spender`'s allowance over `owner`'s shares.
    pub fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        if spender.is_zero() {
            return Err(ShareMarketError::ApproveToZeroAddress);
        }
        self.allowances.insert((owner, spender), amount);
        Ok(())
    }

    /// Consume allowance. `U256::MAX` is an unlimited allowance and is not
    /// decreased.
    pub fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        let current = self.allowance(&owner, &spender);
        if current == U256::MAX {
            return Ok(());
        }
        if current < amount {
            return Err(ShareMarketError::InsufficientAllowance);
        }
        self.allowances.insert((owner, spender), current - amount);
        Ok(())
    }

    /// Sum of every balance, `None` on overflow.
    #[must_use]
    pub fn sum_of_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::zero(), |acc, b| acc.checked_add(*b))
    }
}
