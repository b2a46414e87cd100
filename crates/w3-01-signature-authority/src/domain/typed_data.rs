//! # Typed Structured Data (EIP-712)
//!
//! Digest construction for message submissions.
//!
//! ```text
//! digest = keccak256(0x19 0x01 || domainSeparator || structHash)
//! ```
//!
//! Dynamic `string` members are encoded as the keccak256 of their UTF-8
//! bytes; `uint256` and `address` members as left-padded 32-byte words.

use super::ecdsa::keccak256;
use super::entities::{SubmissionFields, TypedDataDomain};
use shared_types::{u256_to_word, Hash, U256};

/// Domain type string.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Submission type string.
pub const MESSAGE_TYPE: &str =
    "Message(string message,string latitude,string longitude,uint256 tier,uint256 time)";

/// Prefix that marks an EIP-712 digest.
const TYPED_DATA_PREFIX: [u8; 2] = [0x19, 0x01];

/// Hash of [`DOMAIN_TYPE`].
#[must_use]
pub fn domain_type_hash() -> Hash {
    keccak256(DOMAIN_TYPE.as_bytes())
}

/// Hash of [`MESSAGE_TYPE`].
#[must_use]
pub fn message_type_hash() -> Hash {
    keccak256(MESSAGE_TYPE.as_bytes())
}

/// Hashes the domain into its separator.
#[must_use]
pub fn domain_separator(domain: &TypedDataDomain) -> Hash {
    let mut encoded = Vec::with_capacity(32 * 5);
    encoded.extend_from_slice(domain_type_hash().as_bytes());
    encoded.extend_from_slice(keccak256(domain.name.as_bytes()).as_bytes());
    encoded.extend_from_slice(keccak256(domain.version.as_bytes()).as_bytes());
    encoded.extend_from_slice(&u256_to_word(U256::from(domain.chain_id)));
    encoded.extend_from_slice(&domain.verifying_contract.to_word());
    keccak256(&encoded)
}

/// Hashes the submission fields.
#[must_use]
pub fn struct_hash(fields: &SubmissionFields) -> Hash {
    let mut encoded = Vec::with_capacity(32 * 6);
    encoded.extend_from_slice(message_type_hash().as_bytes());
    encoded.extend_from_slice(keccak256(fields.text.as_bytes()).as_bytes());
    encoded.extend_from_slice(keccak256(fields.latitude.as_bytes()).as_bytes());
    encoded.extend_from_slice(keccak256(fields.longitude.as_bytes()).as_bytes());
    encoded.extend_from_slice(&u256_to_word(U256::from(fields.tier)));
    encoded.extend_from_slice(&u256_to_word(U256::from(fields.deadline)));
    keccak256(&encoded)
}

/// Final signing digest for `fields` under `domain`.
#[must_use]
pub fn build_digest(domain: &TypedDataDomain, fields: &SubmissionFields) -> Hash {
    digest_from_parts(&domain_separator(domain), &struct_hash(fields))
}

/// Combines a precomputed separator and struct hash.
#[must_use]
pub fn digest_from_parts(separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut encoded = [0u8; 66];
    encoded[..2].copy_from_slice(&TYPED_DATA_PREFIX);
    encoded[2..34].copy_from_slice(separator.as_bytes());
    encoded[34..].copy_from_slice(struct_hash.as_bytes());
    keccak256(&encoded)
}
