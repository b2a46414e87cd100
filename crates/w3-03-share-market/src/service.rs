//! # Share Market Service
//!
//! The deployed contract: wires the share ledger and the price math to the
//! host ledger's native balances, block height and event log.
//!
//! ## Buy
//!
//! 1. Price: initial price before the vesting deadline, share value after.
//!    The share value uses the treasury as it stood before this call's value.
//! 2. Payment must be exactly `amount * price / 10^18` and nonzero.
//! 3. Fill from the resale pool, then mint.
//! 4. With [`BuyProceeds::Owner`] the payment is then delivered to the
//!    owner; a rejected delivery fails the purchase.
//!
//! ## Sell
//!
//! 1. Only after the vesting deadline, only up to the caller's balance.
//! 2. Shares move into the resale pool.
//! 3. Then the payout is delivered. A rejected payout fails the whole call.

use crate::config::{BuyProceeds, ShareMarketConfig};
use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::domain::pricing::{allocate, share_value, value_of, Allocation, Availability};
use crate::domain::share_ledger::ShareLedger;
use crate::errors::ShareMarketError;
use crate::events::{Approval, SharesPurchased, SharesRedeemed, Transfer};
use crate::guard::BusyFlag;
use crate::ports::inbound::{ShareMarketApi, ShareTokenApi};
use shared_types::units::DECIMALS;
use shared_types::{Address, U256};
use tracing::{debug, info, instrument, warn};
use w3_02_host_ledger::{transact, Call, Contract, Ledger};

/// The share market contract.
#[derive(Debug)]
pub struct ShareMarket {
    address: Address,
    token_name: String,
    token_symbol: String,
    domain_name: Option<String>,
    initial_price_per_share: U256,
    vesting_deadline: u64,
    owner: Address,
    buy_proceeds: BuyProceeds,
    shares: ShareLedger,
    busy: BusyFlag,
}

impl Contract for ShareMarket {
    type Snapshot = ShareLedger;

    fn address(&self) -> Address {
        self.address
    }

    fn snapshot(&self) -> ShareLedger {
        self.shares.clone()
    }

    fn restore(&mut self, snapshot: ShareLedger) {
        self.shares = snapshot;
    }
}

impl ShareMarket {
    /// Deploy a market from `deployer`.
    ///
    /// Mints the private sale to the owner and fixes the vesting deadline at
    /// `height + vesting_period`.
    #[instrument(skip_all, fields(deployer = %deployer, symbol = %config.token_symbol))]
    pub fn deploy(
        ledger: &mut Ledger,
        deployer: Address,
        config: ShareMarketConfig,
    ) -> Result<Self, ShareMarketError> {
        config.validate()?;

        let vesting_deadline = ledger
            .height()
            .checked_add(config.vesting_period)
            .ok_or(ShareMarketError::Overflow)?;

        let checkpoint = ledger.checkpoint();
        let address = ledger.allocate_address(deployer);

        let mut shares = ShareLedger::new(config.max_supply);
        let minted = shares
            .mint(config.owner, config.private_sale_amount)
            .and_then(|()| {
                ledger
                    .emit(
                        address,
                        &Transfer {
                            from: Address::ZERO,
                            to: config.owner,
                            value: config.private_sale_amount,
                        },
                    )
                    .map_err(ShareMarketError::from)
            });
        if let Err(e) = minted {
            ledger.revert_to(checkpoint);
            return Err(e);
        }

        info!(
            %address,
            vesting_deadline,
            private_sale = %config.private_sale_amount,
            "share market deployed"
        );

        Ok(Self {
            address,
            token_name: config.token_name,
            token_symbol: config.token_symbol,
            domain_name: config.domain_name,
            initial_price_per_share: config.initial_price_per_share,
            vesting_deadline,
            owner: config.owner,
            buy_proceeds: config.buy_proceeds,
            shares,
            busy: BusyFlag::default(),
        })
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    #[must_use]
    pub fn buy_proceeds(&self) -> BuyProceeds {
        self.buy_proceeds
    }

    #[must_use]
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    #[must_use]
    pub fn initial_price_per_share(&self) -> U256 {
        self.initial_price_per_share
    }

    /// First height at which selling opens.
    #[must_use]
    pub fn vesting_deadline(&self) -> u64 {
        self.vesting_deadline
    }

    /// True once the vesting deadline has been reached.
    #[must_use]
    pub fn is_vested(&self, ledger: &Ledger) -> bool {
        ledger.height() >= self.vesting_deadline
    }

    /// Native balance held by the market.
    #[must_use]
    pub fn treasury(&self, ledger: &Ledger) -> U256 {
        ledger.balance_of(&self.address)
    }

    /// True while a buy or sell is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Read-only view of the share ledger.
    #[must_use]
    pub fn shares(&self) -> &ShareLedger {
        &self.shares
    }

    /// Check the supply invariants.
    #[must_use]
    pub fn check_invariants(&self) -> InvariantCheckResult {
        check_all_invariants(&self.shares)
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn price_at(&self, ledger: &Ledger, treasury: U256) -> Result<U256, ShareMarketError> {
        if ledger.height() < self.vesting_deadline {
            return Ok(self.initial_price_per_share);
        }
        share_value(treasury, self.shares.total_supply()).ok_or(ShareMarketError::Overflow)
    }

    fn move_and_log(
        &mut self,
        ledger: &mut Ledger,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        self.shares.move_shares(from, to, amount)?;
        ledger.emit(self.address, &Transfer { from, to, value: amount })?;
        Ok(())
    }

    fn reject_value(call: &Call) -> Result<(), ShareMarketError> {
        if call.value.is_zero() {
            Ok(())
        } else {
            Err(ShareMarketError::InvalidPayment)
        }
    }
}

// =============================================================================
// MARKET
// =============================================================================

impl ShareMarketApi for ShareMarket {
    fn current_share_value(&self, ledger: &Ledger) -> Result<U256, ShareMarketError> {
        share_value(self.treasury(ledger), self.shares.total_supply())
            .ok_or(ShareMarketError::Overflow)
    }

    fn available_shares(&self) -> Availability {
        Availability {
            reserved_for_resale: self.shares.balance_of(&self.address),
            publicly_mintable: self.shares.mintable(),
        }
    }

    fn price_per_share(&self, ledger: &Ledger) -> Result<U256, ShareMarketError> {
        self.price_at(ledger, self.treasury(ledger))
    }

    #[instrument(skip_all, fields(caller = %call.caller, value = %call.value, amount = %amount))]
    fn buy_shares(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        amount: U256,
    ) -> Result<Allocation, ShareMarketError> {
        let _guard = self.busy.enter()?;

        let result = transact(self, ledger, call, |market, ledger| {
            let treasury_before = market
                .treasury(ledger)
                .checked_sub(call.value)
                .ok_or(ShareMarketError::Overflow)?;
            let price = market.price_at(ledger, treasury_before)?;
            let required = value_of(amount, price).ok_or(ShareMarketError::Overflow)?;
            debug!(%price, %required, "priced purchase");

            if call.value.is_zero() || call.value != required {
                return Err(ShareMarketError::InvalidPayment);
            }

            let allocation = allocate(amount, &market.available_shares())
                .ok_or(ShareMarketError::SupplyExceeded)?;

            if !allocation.from_reserve.is_zero() {
                let pool = market.address;
                market.move_and_log(ledger, pool, call.caller, allocation.from_reserve)?;
            }
            if !allocation.minted.is_zero() {
                market.shares.mint(call.caller, allocation.minted)?;
                ledger.emit(
                    market.address,
                    &Transfer {
                        from: Address::ZERO,
                        to: call.caller,
                        value: allocation.minted,
                    },
                )?;
            }

            ledger.emit(
                market.address,
                &SharesPurchased {
                    buyer: call.caller,
                    amount,
                    paid: call.value,
                    from_reserve: allocation.from_reserve,
                    minted: allocation.minted,
                },
            )?;

            if market.buy_proceeds == BuyProceeds::Owner {
                let (pool, owner) = (market.address, market.owner);
                ledger
                    .deliver(pool, owner, call.value, market)
                    .map_err(ShareMarketError::from_payout)?;
            }
            Ok(allocation)
        });

        match &result {
            Ok(allocation) => info!(
                from_reserve = %allocation.from_reserve,
                minted = %allocation.minted,
                "shares bought"
            ),
            Err(e) => warn!(reason = %e, "buy rejected"),
        }
        result
    }

    #[instrument(skip_all, fields(caller = %call.caller, amount = %amount))]
    fn sell_shares(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        amount: U256,
    ) -> Result<U256, ShareMarketError> {
        let _guard = self.busy.enter()?;

        let result = transact(self, ledger, call, |market, ledger| {
            Self::reject_value(call)?;
            if !market.is_vested(ledger) {
                return Err(ShareMarketError::VestingNotElapsed);
            }
            if market.shares.balance_of(&call.caller) < amount {
                return Err(ShareMarketError::InsufficientBalance);
            }

            let price = market.current_share_value(ledger)?;
            let payout = value_of(amount, price).ok_or(ShareMarketError::Overflow)?;
            debug!(%price, %payout, "priced redemption");

            // Shares reach the pool before any value leaves
            let pool = market.address;
            market.move_and_log(ledger, call.caller, pool, amount)?;

            ledger
                .deliver(pool, call.caller, payout, market)
                .map_err(ShareMarketError::from_payout)?;

            ledger.emit(
                pool,
                &SharesRedeemed {
                    seller: call.caller,
                    amount,
                    payout,
                },
            )?;
            Ok(payout)
        });

        match &result {
            Ok(payout) => info!(payout = %payout, "shares sold"),
            Err(e) => warn!(reason = %e, "sell rejected"),
        }
        result
    }
}

// =============================================================================
// TOKEN
// =============================================================================

impl ShareTokenApi for ShareMarket {
    fn name(&self) -> &str {
        &self.token_name
    }

    fn symbol(&self) -> &str {
        &self.token_symbol
    }

    fn decimals(&self) -> u8 {
        DECIMALS as u8
    }

    fn total_supply(&self) -> U256 {
        self.shares.total_supply()
    }

    fn max_supply(&self) -> U256 {
        self.shares.max_supply()
    }

    fn balance_of(&self, account: &Address) -> U256 {
        self.shares.balance_of(account)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.shares.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        spender: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        transact(self, ledger, call, |market, ledger| {
            Self::reject_value(call)?;
            market.shares.approve(call.caller, spender, amount)?;
            ledger.emit(
                market.address,
                &Approval {
                    owner: call.caller,
                    spender,
                    value: amount,
                },
            )?;
            Ok(())
        })
    }

    fn transfer(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        to: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        transact(self, ledger, call, |market, ledger| {
            Self::reject_value(call)?;
            market.move_and_log(ledger, call.caller, to, amount)
        })
    }

    fn transfer_from(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ShareMarketError> {
        transact(self, ledger, call, |market, ledger| {
            Self::reject_value(call)?;
            market.shares.spend_allowance(from, call.caller, amount)?;
            market.move_and_log(ledger, from, to, amount)
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
