//! # Signature Authority Service
//!
//! Application service layer that implements the `SignatureAuthorityApi` trait.
//!
//! The authority holds no state: every answer is a pure function of the
//! domain, the fields and the signature bytes.

use crate::domain::ecdsa;
use crate::domain::entities::{EcdsaSignature, SubmissionFields, TypedDataDomain};
use crate::domain::errors::SignatureError;
use crate::domain::typed_data;
use crate::ports::inbound::SignatureAuthorityApi;
use shared_types::{Address, Hash};

/// Signature Authority Service.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureAuthority;

impl SignatureAuthority {
    /// Create a new signature authority.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SignatureAuthorityApi for SignatureAuthority {
    fn build_digest(&self, domain: &TypedDataDomain, fields: &SubmissionFields) -> Hash {
        typed_data::build_digest(domain, fields)
    }

    fn recover(&self, digest: &Hash, signature: &[u8]) -> Option<Address> {
        ecdsa::recover(digest, signature)
    }

    fn recover_checked(&self, digest: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
        let parsed = EcdsaSignature::from_bytes(signature)?;
        ecdsa::recover_address(digest, &parsed)
    }
}
