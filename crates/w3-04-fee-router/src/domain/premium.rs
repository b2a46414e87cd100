//! # Premium Registry
//!
//! Accounts exempt from the tier-3 price. Membership is one-way: there is
//! no operation that removes an account.

use shared_types::Address;
use std::collections::BTreeSet;

/// Set of premium accounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PremiumRegistry {
    members: BTreeSet<Address>,
}

impl PremiumRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, account: &Address) -> bool {
        self.members.contains(account)
    }

    /// Grant premium. Returns false if the account already had it.
    pub fn grant(&mut self, account: Address) -> bool {
        self.members.insert(account)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
