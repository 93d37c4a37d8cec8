//! State definitions for the Token Safe contract
//!
//! Each account's safe is spread over two maps: its password record and its
//! per-token balances. Both are created lazily on first write and never removed.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::{Digest, ZERO_DIGEST};

// ============================================================================
// Account State
// ============================================================================

/// Password record of one account
#[cw_serde]
pub struct PasswordRecord {
    /// Whether a password digest was ever registered
    pub initialized: bool,
    /// Keccak-256 digest of the current password (zero until initialized)
    pub hash: Digest,
}

impl Default for PasswordRecord {
    fn default() -> Self {
        Self {
            initialized: false,
            hash: ZERO_DIGEST,
        }
    }
}

/// Safe statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Accounts that registered a password
    pub initialized_accounts: u64,
    /// Successful rotations (explicit changes and withdrawals)
    pub password_changes: u64,
    /// Completed deposits
    pub deposits: u64,
    /// Completed withdrawals
    pub withdrawals: u64,
}

// ============================================================================
// Transfer Tracking
// ============================================================================

/// Direction of a CW20 transfer dispatched by the safe
#[cw_serde]
pub enum TransferKind {
    /// `TransferFrom` pulling tokens into the safe; the credit happens on reply
    Deposit,
    /// `Transfer` paying out of the safe; the debit already happened
    Withdraw,
}

/// Transfer dispatched as a sub-message and not yet confirmed by `reply`
#[cw_serde]
pub struct PendingTransfer {
    pub kind: TransferKind,
    pub account: Addr,
    pub token: Addr,
    pub amount: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-safe";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Password records
/// Key: account address, Value: PasswordRecord (absent = uninitialized)
pub const PASSWORDS: Map<&Addr, PasswordRecord> = Map::new("passwords");

/// Custodied balances
/// Key: (account address, token address), Value: amount (absent = zero)
pub const BALANCES: Map<(&Addr, &Addr), Uint128> = Map::new("balances");

/// Sum of all account balances per token
/// Key: token address, Value: total amount held for accounts
pub const TOTAL_CUSTODY: Map<&Addr, Uint128> = Map::new("total_custody");

/// Safe statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Transfer currently in flight (doubles as the re-entrancy lock)
pub const IN_FLIGHT: Item<PendingTransfer> = Item::new("in_flight");
