//! Common - Password Hashing for the Token Safe
//!
//! The safe never stores a password, only its digest. Clients register
//! `compute_password_hash(password)` and later prove knowledge of the
//! password by revealing it, so both sides must agree on the digest bit for bit.
//!
//! The digest is Keccak-256 over the raw UTF-8 bytes of the password, which is
//! identical to Solidity's `keccak256(abi.encodePacked(password))`. Digests
//! persisted by an EVM deployment therefore verify here unchanged.

pub mod hash;

pub use hash::{compute_password_hash, digest_to_hex, keccak256, Digest, ZERO_DIGEST};
