//! # Outbound Ports (Hosted Code)
//!
//! What the ledger needs from the code it runs.
//!
//! - [`Contract`]: a stateful contract whose state can be checkpointed
//! - [`Receiver`]: code that runs when value is delivered to its address
//! - [`LedgerEvent`]: a typed event that can be written to the log

use crate::domain::entities::Delivery;
use crate::service::Ledger;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::Address;
use std::any::Any;

/// A contract hosted on the ledger.
///
/// [`crate::transact`] snapshots the contract before running an entry point
/// and restores the snapshot if the entry point fails.
pub trait Contract: Any {
    /// Captured contract state.
    type Snapshot;

    /// The contract's own account.
    fn address(&self) -> Address;

    /// Capture all state an entry point may mutate.
    fn snapshot(&self) -> Self::Snapshot;

    /// Put captured state back.
    fn restore(&mut self, snapshot: Self::Snapshot);
}

/// Outcome of receiver code. `Err` carries the rejection reason.
pub type ReceiveResult = Result<(), String>;

/// Code that runs when value arrives at its address.
///
/// The ledger detaches the receiver while it runs, so the receiver gets
/// mutable access to the ledger and to the contract that is paying
/// (`origin`). That is exactly the access a reentrant attacker would have.
/// Value sent back to the receiver's own address while it runs is refused.
pub trait Receiver: Send {
    /// React to an incoming value. Returning `Err` rejects it and undoes
    /// everything the delivery did.
    fn on_receive(
        &mut self,
        delivery: &Delivery,
        ledger: &mut Ledger,
        origin: &mut dyn Any,
    ) -> ReceiveResult;
}

/// A typed event in the ledger's log.
pub trait LedgerEvent: Serialize + DeserializeOwned {
    /// Event name as it appears in the log.
    const NAME: &'static str;
}
