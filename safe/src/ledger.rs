//! Balance ledger.
//!
//! Per-account, per-token custody balances plus a per-token total. Every
//! mutation goes through `credit` / `debit`, which keep both in step.

use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{BALANCES, TOTAL_CUSTODY};

/// Balance of `account` in `token` (zero if never credited)
pub fn balance_of(storage: &dyn Storage, account: &Addr, token: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES
        .may_load(storage, (account, token))?
        .unwrap_or_default())
}

/// Total amount of `token` held for all accounts
pub fn total_custody(storage: &dyn Storage, token: &Addr) -> StdResult<Uint128> {
    Ok(TOTAL_CUSTODY.may_load(storage, token)?.unwrap_or_default())
}

/// Reject zero amounts, and amounts above `available` when given.
pub fn validate_amount(
    account: &Addr,
    token: &Addr,
    amount: Uint128,
    available: Option<Uint128>,
) -> Result<(), ContractError> {
    let over = available.is_some_and(|available| amount > available);
    if amount.is_zero() || over {
        return Err(ContractError::AmountError {
            account: account.to_string(),
            token: token.to_string(),
            amount,
        });
    }
    Ok(())
}

/// Add `amount` to the account's balance. Returns the new balance.
pub fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    token: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    validate_amount(account, token, amount, None)?;

    let balance = balance_of(storage, account, token)?
        .checked_add(amount)
        .map_err(StdError::from)?;
    let total = total_custody(storage, token)?
        .checked_add(amount)
        .map_err(StdError::from)?;

    BALANCES.save(storage, (account, token), &balance)?;
    TOTAL_CUSTODY.save(storage, token, &total)?;
    Ok(balance)
}

/// Remove `amount` from the account's balance. Returns the new balance.
///
/// Fails with `AmountError` carrying the requested amount when it is zero or
/// above the current balance.
pub fn debit(
    storage: &mut dyn Storage,
    account: &Addr,
    token: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let current = balance_of(storage, account, token)?;
    validate_amount(account, token, amount, Some(current))?;

    let balance = current - amount;
    let total = total_custody(storage, token)?
        .checked_sub(amount)
        .map_err(StdError::from)?;

    BALANCES.save(storage, (account, token), &balance)?;
    TOTAL_CUSTODY.save(storage, token, &total)?;
    Ok(balance)
}
