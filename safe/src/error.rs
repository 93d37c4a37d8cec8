//! Error types for the Token Safe contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Amount Errors
    // ========================================================================

    /// Zero amount, or a withdrawal above the available balance.
    /// `amount` is always the requested amount, never clamped.
    #[error("Invalid amount {amount} of token {token} for account {account}")]
    AmountError {
        account: String,
        token: String,
        amount: Uint128,
    },

    // ========================================================================
    // Password Errors
    // ========================================================================

    #[error("Password not initialized for account {account}")]
    PasswordNotInitialized { account: String },

    #[error("Password already initialized for account {account}")]
    PasswordInitialized { account: String },

    #[error("New password hash equals the current one for account {account}")]
    PasswordSame { account: String },

    #[error("Wrong password for account {account}")]
    PasswordWrong { account: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Reentrant call rejected: a token transfer is in flight")]
    Reentrancy,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("No token transfer in flight")]
    NoTransferInFlight,
}
