//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{SubmissionFields, TypedDataDomain};
use crate::domain::errors::SignatureError;
use shared_types::{Address, Hash};

/// Primary Signature Authority API.
///
/// Implementations must be thread-safe (`Send + Sync`) and stateless with
/// respect to the submissions they check.
pub trait SignatureAuthorityApi: Send + Sync {
    /// Build the typed-data digest a submission is signed over.
    fn build_digest(&self, domain: &TypedDataDomain, fields: &SubmissionFields) -> Hash;

    /// Recover the signer of `digest`.
    ///
    /// # Security
    /// - Yields `None` for malformed or malleable signatures, never an error
    /// - Callers must compare the result to the identity they expect
    fn recover(&self, digest: &Hash, signature: &[u8]) -> Option<Address>;

    /// Like [`recover`](Self::recover), with the reason recovery failed.
    fn recover_checked(&self, digest: &Hash, signature: &[u8]) -> Result<Address, SignatureError>;

    /// True only when `signature` recovers to `expected`.
    fn expect_signer(&self, digest: &Hash, signature: &[u8], expected: Address) -> bool {
        self.recover(digest, signature) == Some(expected)
    }
}
