//! # Domain Entities
//!
//! Core data structures for submission signing.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::Address;

use super::errors::SignatureError;

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

// =============================================================================
// SIGNATURES
// =============================================================================

/// ECDSA signature on the secp256k1 curve, split into its components.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Splits a 65-byte `r || s || v` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Joins the components back into `r || s || v`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Signature bytes exactly as a caller submitted them.
///
/// Kept opaque so malformed input reaches recovery (and fails there) instead
/// of being rejected while decoding the call.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSignature(#[serde_as(as = "Hex")] pub Vec<u8>);

impl RawSignature {
    /// Wraps raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<EcdsaSignature> for RawSignature {
    fn from(sig: EcdsaSignature) -> Self {
        Self(sig.to_bytes().to_vec())
    }
}

impl From<&[u8]> for RawSignature {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

// =============================================================================
// TYPED DATA
// =============================================================================

/// The EIP-712 domain a submission is bound to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataDomain {
    /// Human-readable signing domain, e.g. `"idecentralize"`.
    pub name: String,
    /// Domain version, e.g. `"1"`.
    pub version: String,
    /// Chain identity (EIP-155).
    pub chain_id: u64,
    /// The router that verifies the signature.
    pub verifying_contract: Address,
}

/// The signed fields of a message submission.
///
/// `text` is hashed as the schema field `message` and `deadline` as `time`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionFields {
    /// Message body.
    pub text: String,
    /// Latitude, as free-form text.
    pub latitude: String,
    /// Longitude, as free-form text.
    pub longitude: String,
    /// Price/privilege tier.
    pub tier: u64,
    /// Unix timestamp after which the submission is rejected.
    pub deadline: u64,
}

impl SubmissionFields {
    /// Builds the field set.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        tier: u64,
        deadline: u64,
    ) -> Self {
        Self {
            text: text.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            tier,
            deadline,
        }
    }

    /// Same fields with a different tier.
    #[must_use]
    pub fn with_tier(mut self, tier: u64) -> Self {
        self.tier = tier;
        self
    }

    /// Same fields with a different deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: u64) -> Self {
        self.deadline = deadline;
        self
    }
}
