//! Message types for the Token Safe contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Instantiate message. The safe has no admin and no parameters.
#[cw_serde]
pub struct InstantiateMsg {}

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Password Management
    // ========================================================================
    /// Register the caller's first password digest
    ///
    /// Fails if the caller already registered one.
    InitPassword {
        /// keccak256(password), 32 bytes
        hash: Binary,
    },

    /// Replace the caller's password digest
    ///
    /// Reveals the current password; `new_hash` must differ from the stored digest.
    ChangePassword {
        /// Current password in plaintext
        current_password: String,
        /// keccak256(new password), 32 bytes
        new_hash: Binary,
    },

    // ========================================================================
    // Custody
    // ========================================================================
    /// Pull CW20 tokens from the caller into the safe
    ///
    /// Requires a registered password and a CW20 allowance to the safe.
    DepositToken {
        /// CW20 contract address
        token: String,
        amount: Uint128,
    },

    /// Withdraw CW20 tokens to the caller, rotating the password
    ///
    /// The password is rotated and the balance debited before the tokens move.
    WithdrawToken {
        /// CW20 contract address
        token: String,
        amount: Uint128,
        /// Current password in plaintext
        current_password: String,
        /// keccak256(next password), 32 bytes
        new_hash: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// keccak256 of a password, exactly as the safe checks it
    #[returns(PasswordHashResponse)]
    ComputePasswordHash { secret: String },

    /// Custodied balance of an account in a token
    #[returns(TokenBalanceResponse)]
    TokenBalance { account: String, token: String },

    /// Whether an account registered a password, and its current digest
    #[returns(PasswordStatusResponse)]
    PasswordStatus { account: String },

    /// Total amount of a token held for all accounts
    #[returns(TotalCustodyResponse)]
    TotalCustody { token: String },

    /// Safe statistics
    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct PasswordHashResponse {
    /// 32-byte digest
    pub hash: Binary,
}

#[cw_serde]
pub struct TokenBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct PasswordStatusResponse {
    pub initialized: bool,
    /// Current digest, `None` until initialized
    pub hash: Option<Binary>,
}

#[cw_serde]
pub struct TotalCustodyResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub initialized_accounts: u64,
    pub password_changes: u64,
    pub deposits: u64,
    pub withdrawals: u64,
}
