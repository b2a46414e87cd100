//! # Domain Invariants
//!
//! Supply invariants that must hold in every reachable state:
//!
//! - Σ balances == totalSupply (the resale pool included)
//! - totalSupply ≤ maxSupply

use super::share_ledger::ShareLedger;
use shared_types::U256;
use std::fmt;

/// Σ balances == totalSupply
#[must_use]
pub fn check_conservation_invariant(shares: &ShareLedger) -> bool {
    shares.sum_of_balances() == Some(shares.total_supply())
}

/// totalSupply ≤ maxSupply
#[must_use]
pub fn check_supply_cap_invariant(shares: &ShareLedger) -> bool {
    shares.total_supply() <= shares.max_supply()
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(shares: &ShareLedger) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_conservation_invariant(shares) {
        violations.push(InvariantViolation::BalancesDoNotSumToSupply {
            sum: shares.sum_of_balances(),
            total_supply: shares.total_supply(),
        });
    }

    if !check_supply_cap_invariant(shares) {
        violations.push(InvariantViolation::SupplyAboveCap {
            total_supply: shares.total_supply(),
            max_supply: shares.max_supply(),
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Balances do not add up (`None` if the sum overflowed).
    BalancesDoNotSumToSupply { sum: Option<U256>, total_supply: U256 },
    /// More shares exist than the cap allows.
    SupplyAboveCap { total_supply: U256, max_supply: U256 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BalancesDoNotSumToSupply { sum: Some(sum), total_supply } => {
                write!(f, "balances sum to {sum}, total supply is {total_supply}")
            }
            Self::BalancesDoNotSumToSupply { sum: None, total_supply } => {
                write!(f, "balances overflow, total supply is {total_supply}")
            }
            Self::SupplyAboveCap {
                total_supply,
                max_supply,
            } => write!(f, "total supply {total_supply} above cap {max_supply}"),
        }
    }
}
