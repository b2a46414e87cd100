//! # Busy Flag
//!
//! Rejects a nested `buy_shares`/`sell_shares` while one is in flight.
//!
//! The flag lives outside the snapshotted contract state, so rolling back a
//! failed call never clears a flag an outer call still holds. The guard
//! releases it on drop, on every exit path.

use crate::errors::ShareMarketError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared busy flag of one market.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag {
    busy: Arc<AtomicBool>,
}

impl BusyFlag {
    /// Set the flag, or fail with `Reentrant` if it is already set.
    pub fn enter(&self) -> Result<BusyGuard, ShareMarketError> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(ShareMarketError::Reentrant);
        }
        Ok(BusyGuard {
            busy: Arc::clone(&self.busy),
        })
    }

    /// True while a guarded call is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Holds the flag until dropped (RAII).
#[derive(Debug)]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
