//! # Off-Ledger Signer
//!
//! Produces submission signatures the way a wallet would. Compiled only with
//! the `test-utils` feature; nothing on a value path depends on it.

use crate::domain::ecdsa::{address_from_pubkey, sign_prehash_normalized};
use crate::domain::entities::{EcdsaSignature, RawSignature, SubmissionFields, TypedDataDomain};
use crate::domain::errors::SignatureError;
use crate::domain::typed_data::build_digest;
use k256::ecdsa::SigningKey;
use shared_types::{Address, Hash};

/// A secp256k1 key pair that signs typed-data digests.
#[derive(Clone)]
pub struct OffLedgerSigner {
    key: SigningKey,
    address: Address,
}

impl std::fmt::Debug for OffLedgerSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffLedgerSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl OffLedgerSigner {
    /// Fresh random key.
    #[must_use]
    pub fn random() -> Self {
        Self::from_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Key from a 32-byte secret scalar.
    pub fn from_bytes(secret: &[u8; 32]) -> Result<Self, SignatureError> {
        SigningKey::from_slice(secret)
            .map(Self::from_key)
            .map_err(|_| SignatureError::InvalidFormat)
    }

    fn from_key(key: SigningKey) -> Self {
        let address = address_from_pubkey(key.verifying_key());
        Self { key, address }
    }

    /// The account identity this key signs for.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs a raw digest. `v` is 27 or 28 and `s` is always low.
    pub fn sign_digest(&self, digest: &Hash) -> Result<EcdsaSignature, SignatureError> {
        sign_prehash_normalized(digest, &self.key)
    }

    /// Signs `fields` under `domain`.
    pub fn sign_submission(
        &self,
        domain: &TypedDataDomain,
        fields: &SubmissionFields,
    ) -> Result<RawSignature, SignatureError> {
        self.sign_digest(&build_digest(domain, fields))
            .map(RawSignature::from)
    }
}
