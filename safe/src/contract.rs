//! Token Safe Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers and transfer replies
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_change_password, execute_deposit_token, execute_init_password, execute_withdraw_token,
    reply_transfer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_password_hash, query_password_status, query_stats, query_token_balance,
    query_total_custody,
};
use crate::state::{Stats, CONTRACT_NAME, CONTRACT_VERSION, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("version", CONTRACT_VERSION))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Password management
        ExecuteMsg::InitPassword { hash } => execute_init_password(deps, info, hash),
        ExecuteMsg::ChangePassword {
            current_password,
            new_hash,
        } => execute_change_password(deps, info, current_password, new_hash),

        // Custody
        ExecuteMsg::DepositToken { token, amount } => {
            execute_deposit_token(deps, env, info, token, amount)
        }
        ExecuteMsg::WithdrawToken {
            token,
            amount,
            current_password,
            new_hash,
        } => execute_withdraw_token(deps, info, token, amount, current_password, new_hash),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    reply_transfer(deps, msg.id)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ComputePasswordHash { secret } => {
            to_json_binary(&query_compute_password_hash(secret)?)
        }
        QueryMsg::TokenBalance { account, token } => {
            to_json_binary(&query_token_balance(deps, account, token)?)
        }
        QueryMsg::PasswordStatus { account } => {
            to_json_binary(&query_password_status(deps, account)?)
        }
        QueryMsg::TotalCustody { token } => to_json_binary(&query_total_custody(deps, token)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
