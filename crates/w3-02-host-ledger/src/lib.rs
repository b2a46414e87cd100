//! # Host Ledger (W3-02)
//!
//! The execution environment the settlement contracts run on, made concrete
//! as an in-memory ledger.
//!
//! ## Responsibilities
//!
//! - Native-currency balances for every account (people and contracts alike)
//! - Block context: height, timestamp and chain id
//! - An append-only event log with typed decoding
//! - Value delivery into receiver code, which may call back into the sender
//! - All-or-nothing entry points through [`transact`]
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): block context, calls, log entries, address derivation
//! - **Ports Layer** (`ports/`): what hosted code implements (`Contract`, `Receiver`, `LedgerEvent`)
//! - **Service Layer** (`service.rs`): the `Ledger` itself
//! - **Transactions** (`transact.rs`): checkpoint, credit, run, restore on error
//!
//! The ledger executes one call at a time. There is no internal parallelism;
//! the only way for control to re-enter a contract is through receiver code
//! during [`Ledger::deliver`].

pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;
pub mod transact;

pub use config::LedgerConfig;
pub use domain::addressing::contract_address;
pub use domain::entities::{BlockContext, Call, Checkpoint, Delivery, LogEntry};
pub use errors::{ConfigError, LedgerError};
pub use ports::outbound::{Contract, LedgerEvent, ReceiveResult, Receiver};
pub use service::{Ledger, RECEIVER_EXECUTING};
pub use transact::transact;
