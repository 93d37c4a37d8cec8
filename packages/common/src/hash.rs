//! Keccak-256 digest helpers.

use tiny_keccak::{Hasher, Keccak};

/// Digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// 32-byte Keccak-256 output
pub type Digest = [u8; DIGEST_LEN];

/// Sentinel stored for accounts that never registered a password
pub const ZERO_DIGEST: Digest = [0u8; DIGEST_LEN];

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; DIGEST_LEN];
    hasher.finalize(&mut output);
    output
}

/// Hash a password the way the safe checks it.
///
/// Matches Solidity `keccak256(abi.encodePacked(password))`: the string is
/// hashed as its raw bytes with no length prefix or padding.
pub fn compute_password_hash(password: &str) -> Digest {
    keccak256(password.as_bytes())
}

/// Render a digest as a `0x`-prefixed lowercase hex string (for attributes/events)
pub fn digest_to_hex(digest: &Digest) -> String {
    format!("0x{}", hex::encode(digest))
}
