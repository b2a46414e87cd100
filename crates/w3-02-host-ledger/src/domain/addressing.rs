//! # Contract Addressing
//!
//! Deployed contracts get an address derived from the deployer and the
//! deployer's deployment count, so addresses are known before construction
//! finishes and never collide for one deployer.

use sha3::{Digest, Keccak256};
use shared_types::Address;

/// `keccak256(deployer || nonce_be)[12..]`
#[must_use]
pub fn contract_address(deployer: &Address, nonce: u64) -> Address {
    let mut hasher = Keccak256::new();
    hasher.update(deployer.as_bytes());
    hasher.update(nonce.to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address::new(bytes)
}
