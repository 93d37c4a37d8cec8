//! Query handlers for the Token Safe contract.

use cosmwasm_std::{Binary, Deps, StdResult};

use common::compute_password_hash;

use crate::ledger::{balance_of, total_custody};
use crate::msg::{
    PasswordHashResponse, PasswordStatusResponse, StatsResponse, TokenBalanceResponse,
    TotalCustodyResponse,
};
use crate::password::{load_state, PasswordState};
use crate::state::STATS;

/// Hash a password without touching state.
pub fn query_compute_password_hash(secret: String) -> StdResult<PasswordHashResponse> {
    Ok(PasswordHashResponse {
        hash: Binary::from(compute_password_hash(&secret).to_vec()),
    })
}

pub fn query_token_balance(
    deps: Deps,
    account: String,
    token: String,
) -> StdResult<TokenBalanceResponse> {
    let account = deps.api.addr_validate(&account)?;
    let token = deps.api.addr_validate(&token)?;
    Ok(TokenBalanceResponse {
        balance: balance_of(deps.storage, &account, &token)?,
    })
}

pub fn query_password_status(deps: Deps, account: String) -> StdResult<PasswordStatusResponse> {
    let account = deps.api.addr_validate(&account)?;
    let response = match load_state(deps.storage, &account)? {
        PasswordState::Uninitialized => PasswordStatusResponse {
            initialized: false,
            hash: None,
        },
        PasswordState::Initialized(hash) => PasswordStatusResponse {
            initialized: true,
            hash: Some(Binary::from(hash.to_vec())),
        },
    };
    Ok(response)
}

pub fn query_total_custody(deps: Deps, token: String) -> StdResult<TotalCustodyResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(TotalCustodyResponse {
        amount: total_custody(deps.storage, &token)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        initialized_accounts: stats.initialized_accounts,
        password_changes: stats.password_changes,
        deposits: stats.deposits,
        withdrawals: stats.withdrawals,
    })
}
