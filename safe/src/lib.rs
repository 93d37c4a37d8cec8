//! Token Safe Contract - Password-Gated CW20 Custody
//!
//! Accounts deposit CW20 tokens into the safe and can only take them back by
//! revealing a password whose Keccak-256 digest they registered earlier.
//!
//! # Password Lifecycle
//! 1. `InitPassword` registers the first digest (once per account)
//! 2. `ChangePassword` reveals the current password and installs a new digest
//! 3. `WithdrawToken` does the same rotation before any funds move, so the
//!    revealed password is dead by the time the transaction is public
//!
//! # Custody Flow
//! - Deposit: `DepositToken` pulls tokens with CW20 `TransferFrom` (requires an
//!   allowance) and credits them once the transfer succeeded. A CW20 `Send` is
//!   not accepted: the safe cannot tell a real token push from a forged hook.
//! - Withdraw: balance is debited first, then CW20 `Transfer` pays the caller
//!
//! # Security
//! - Init-once and rotate-on-use password state machine
//! - Rotation to the same digest is rejected
//! - Re-entrancy lock held while a token transfer is in flight
//! - Every handler is all-or-nothing: any failure reverts all of its writes

pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod gateway;
pub mod ledger;
pub mod msg;
pub mod password;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use common::{compute_password_hash, Digest};
