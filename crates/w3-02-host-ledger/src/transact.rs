//! # Atomic Calls
//!
//! Every contract entry point runs through [`transact`]: the call either
//! completes with all of its effects, or fails with none of them.

use crate::domain::entities::Call;
use crate::errors::LedgerError;
use crate::ports::outbound::Contract;
use crate::service::Ledger;

/// Run `body` as one atomic call on `contract`.
///
/// 1. Checkpoint the contract state and the ledger.
/// 2. Credit `call.value` from the caller to the contract.
/// 3. Run `body`.
/// 4. On `Err`, restore both checkpoints (balances, nonces, log and contract
///    state) before returning the error.
pub fn transact<C, T, E, F>(contract: &mut C, ledger: &mut Ledger, call: &Call, body: F) -> Result<T, E>
where
    C: Contract,
    E: From<LedgerError>,
    F: FnOnce(&mut C, &mut Ledger) -> Result<T, E>,
{
    let saved = contract.snapshot();
    let checkpoint = ledger.checkpoint();

    let result = ledger
        .transfer(call.caller, contract.address(), call.value)
        .map_err(E::from)
        .and_then(|()| body(contract, ledger));

    if result.is_err() {
        contract.restore(saved);
        ledger.revert_to(checkpoint);
    }
    result
}
