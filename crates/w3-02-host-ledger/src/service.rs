//! # Ledger Service
//!
//! In-memory host ledger. Holds native balances, the block context, the
//! event log and the receiver code registered at contract addresses.

use crate::config::LedgerConfig;
use crate::domain::addressing::contract_address;
use crate::domain::entities::{BlockContext, Checkpoint, Delivery, LogEntry};
use crate::errors::LedgerError;
use crate::ports::outbound::{LedgerEvent, Receiver};
use shared_types::{Address, U256};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// Rejection reason for a delivery into receiver code that is still running.
pub const RECEIVER_EXECUTING: &str = "receiver code already executing";

/// The host ledger.
pub struct Ledger {
    config: LedgerConfig,
    block: BlockContext,
    balances: HashMap<Address, U256>,
    nonces: HashMap<Address, u64>,
    logs: Vec<LogEntry>,
    receivers: HashMap<Address, Box<dyn Receiver>>,
    // Addresses whose receiver code is detached and running.
    executing: HashSet<Address>,
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("block", &self.block)
            .field("accounts", &self.balances.len())
            .field("logs", &self.logs.len())
            .field("receivers", &self.receivers.len())
            .field("executing", &self.executing.len())
            .finish()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::from_valid_config(LedgerConfig::default())
    }
}

impl Ledger {
    /// Create a ledger at genesis.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: LedgerConfig) -> Self {
        let block = BlockContext {
            height: config.genesis_height,
            timestamp: config.genesis_timestamp,
            chain_id: config.chain_id,
        };
        Self {
            config,
            block,
            balances: HashMap::new(),
            nonces: HashMap::new(),
            logs: Vec::new(),
            receivers: HashMap::new(),
            executing: HashSet::new(),
        }
    }

    // =========================================================================
    // BLOCK CONTEXT
    // =========================================================================

    /// Current block.
    #[must_use]
    pub fn block(&self) -> BlockContext {
        self.block
    }

    /// Current height.
    #[must_use]
    pub fn height(&self) -> u64 {
        self.block.height
    }

    /// Current timestamp.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.block.timestamp
    }

    /// Chain identity.
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.block.chain_id
    }

    /// Advance `blocks` blocks, moving time forward by the block time each.
    pub fn mine(&mut self, blocks: u64) {
        self.block.height = self.block.height.saturating_add(blocks);
        self.block.timestamp = self
            .block
            .timestamp
            .saturating_add(blocks.saturating_mul(self.config.block_time_secs));
    }

    /// Set the timestamp of the current block.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.block.timestamp = timestamp;
    }

    // =========================================================================
    // BALANCES
    // =========================================================================

    /// Native balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Sum of all native balances.
    #[must_use]
    pub fn total_balance(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::zero(), |acc, b| acc.saturating_add(*b))
    }

    /// Mint native currency into `account` (genesis allocations, faucets).
    pub fn fund(&mut self, account: Address, amount: U256) -> Result<(), LedgerError> {
        let balance = self.balances.entry(account).or_default();
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Move native value without running receiver code.
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), LedgerError> {
        if amount.is_zero() || from == to {
            return Ok(());
        }

        let available = self.balance_of(&from);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                account: from,
                required: amount,
                available,
            });
        }

        let credited = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from, available - amount);
        self.balances.insert(to, credited);
        Ok(())
    }

    /// Move native value and run the recipient's receiver code, if any.
    ///
    /// `origin` is the contract paying out. Receiver code may downcast it
    /// and call back in. If the receiver rejects, every effect of the
    /// delivery is undone and `TransferRejected` is returned.
    ///
    /// Receiver code is detached while it runs. A nested delivery back to an
    /// address whose code is still running is rejected rather than treated
    /// as a plain account.
    pub fn deliver(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
        origin: &mut dyn Any,
    ) -> Result<(), LedgerError> {
        if self.executing.contains(&to) {
            warn!(%from, %to, %amount, "delivery into running receiver code");
            return Err(LedgerError::TransferRejected {
                to,
                reason: RECEIVER_EXECUTING.to_string(),
            });
        }

        let checkpoint = self.checkpoint();
        self.transfer(from, to, amount)?;

        let Some(mut receiver) = self.receivers.remove(&to) else {
            return Ok(());
        };

        let delivery = Delivery { from, to, amount };
        self.executing.insert(to);
        let outcome = receiver.on_receive(&delivery, self, origin);
        self.executing.remove(&to);
        self.receivers.insert(to, receiver);

        match outcome {
            Ok(()) => {
                debug!(%from, %to, %amount, "delivery accepted");
                Ok(())
            }
            Err(reason) => {
                warn!(%from, %to, %amount, %reason, "delivery rejected");
                self.revert_to(checkpoint);
                Err(LedgerError::TransferRejected { to, reason })
            }
        }
    }

    // =========================================================================
    // CODE
    // =========================================================================

    /// Reserve a fresh contract address for `deployer`.
    pub fn allocate_address(&mut self, deployer: Address) -> Address {
        let nonce = self.nonces.entry(deployer).or_insert(0);
        let address = contract_address(&deployer, *nonce);
        *nonce += 1;
        address
    }

    /// Install receiver code at `address`, replacing any existing code.
    pub fn register_receiver(&mut self, address: Address, receiver: Box<dyn Receiver>) {
        self.receivers.insert(address, receiver);
    }

    /// True if receiver code is installed at `address`.
    #[must_use]
    pub fn has_receiver(&self, address: &Address) -> bool {
        self.receivers.contains_key(address) || self.executing.contains(address)
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Append a typed event to the log.
    pub fn emit<E: LedgerEvent>(&mut self, emitter: Address, event: &E) -> Result<(), LedgerError> {
        let data = serde_json::to_value(event)?;
        self.logs.push(LogEntry {
            emitter,
            name: E::NAME.to_string(),
            height: self.block.height,
            data,
        });
        Ok(())
    }

    /// The whole log, oldest first.
    #[must_use]
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Decode every `E` emitted by `emitter`, oldest first.
    pub fn events_of<E: LedgerEvent>(&self, emitter: &Address) -> Result<Vec<E>, LedgerError> {
        self.logs
            .iter()
            .filter(|entry| entry.emitter == *emitter && entry.name == E::NAME)
            .map(|entry| serde_json::from_value(entry.data.clone()).map_err(LedgerError::from))
            .collect()
    }

    // =========================================================================
    // CHECKPOINTS
    // =========================================================================

    /// Capture balances, nonces and the log position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            balances: self.balances.clone(),
            nonces: self.nonces.clone(),
            log_len: self.logs.len(),
        }
    }

    /// Restore a checkpoint. Later log entries are dropped.
    pub fn revert_to(&mut self, checkpoint: Checkpoint) {
        self.balances = checkpoint.balances;
        self.nonces = checkpoint.nonces;
        self.logs.truncate(checkpoint.log_len);
    }
}

// =============================================================================
// TESTS
// =============================================================================
