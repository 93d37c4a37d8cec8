//! Custody handlers: deposit, withdraw and transfer confirmations.
//!
//! Deposit pulls first and credits on reply. Withdraw rotates the password and
//! debits first, then pays out; the reply only confirms.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::events;
use crate::gateway::{self, ensure_not_in_flight};
use crate::ledger::{balance_of, credit, debit, validate_amount};
use crate::password::require_initialized;
use crate::state::TransferKind;

use super::password::rotate;
use super::record;

/// Start a deposit: the CW20 `TransferFrom` runs before the balance is credited.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_not_in_flight(deps.storage)?;
    require_initialized(deps.storage, &info.sender)?;

    let token = deps.api.addr_validate(&token)?;
    validate_amount(&info.sender, &token, amount, None)?;

    let transfer = gateway::pull(
        deps.storage,
        &env.contract.address,
        &info.sender,
        &token,
        amount,
    )?;

    Ok(Response::new()
        .add_submessage(transfer)
        .add_attribute("action", "deposit_token")
        .add_attribute("account", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}

/// Withdraw: amount check, password rotation, debit, then the outbound transfer.
pub fn execute_withdraw_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    current_password: String,
    new_hash: Binary,
) -> Result<Response, ContractError> {
    ensure_not_in_flight(deps.storage)?;

    let token = deps.api.addr_validate(&token)?;
    let balance = balance_of(deps.storage, &info.sender, &token)?;
    validate_amount(&info.sender, &token, amount, Some(balance))?;

    let rotated = rotate(deps.storage, &info.sender, &current_password, &new_hash)?;

    // Debit before the token contract runs so a callback sees the new balance
    let remaining = debit(deps.storage, &info.sender, &token, amount)?;
    let transfer = gateway::push(deps.storage, &info.sender, &token, amount)?;

    Ok(Response::new()
        .add_event(rotated)
        .add_submessage(transfer)
        .add_attribute("action", "withdraw_token")
        .add_attribute("account", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("remaining", remaining))
}

/// Confirmation of a transfer dispatched by `gateway::pull` / `gateway::push`.
pub fn reply_transfer(deps: DepsMut, reply_id: u64) -> Result<Response, ContractError> {
    let pending = gateway::complete(deps.storage, reply_id)?;

    match pending.kind {
        TransferKind::Deposit => {
            let balance = credit(deps.storage, &pending.account, &pending.token, pending.amount)?;
            record(deps.storage, |stats| stats.deposits += 1)?;

            Ok(Response::new()
                .add_event(events::token_deposited(
                    &pending.account,
                    &pending.token,
                    pending.amount,
                ))
                .add_attribute("action", "deposit_confirmed")
                .add_attribute("balance", balance))
        }
        TransferKind::Withdraw => {
            record(deps.storage, |stats| stats.withdrawals += 1)?;

            Ok(Response::new()
                .add_event(events::token_withdrawn(
                    &pending.account,
                    &pending.token,
                    pending.amount,
                ))
                .add_attribute("action", "withdraw_confirmed"))
        }
    }
}
