//! # Signature Authority (W3-01)
//!
//! Verifies who signed a message submission.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): typed-data hashing and secp256k1 recovery, no I/O
//! - **Ports Layer** (`ports/`): the `SignatureAuthorityApi` trait the fee router drives
//! - **Service Layer** (`service.rs`): the stateless `SignatureAuthority`
//!
//! ## Digest
//!
//! Submissions are hashed as EIP-712 structured data over the fixed schema
//! `Message(string message,string latitude,string longitude,uint256 tier,uint256 time)`,
//! bound to a named and versioned domain, the chain id and the verifying
//! router's own address. Changing any field changes the digest, so a signature
//! never transfers to another tier, message, router or chain. An identical
//! signed tuple can be presented again; replay protection is not a goal.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: signatures with high S values never recover
//! - **No Error Oracle**: `recover` yields `None` on any malformed input; callers
//!   compare the recovered identity to the one they expect

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(feature = "test-utils")]
pub mod signer;

// Re-export public API
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover, recover_address};
pub use domain::entities::{EcdsaSignature, RawSignature, SubmissionFields, TypedDataDomain};
pub use domain::errors::SignatureError;
pub use domain::typed_data::{build_digest, domain_separator, struct_hash};
pub use ports::inbound::SignatureAuthorityApi;
pub use service::SignatureAuthority;
