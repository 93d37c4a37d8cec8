//! Password registration and rotation handlers.

use cosmwasm_std::{Addr, Binary, DepsMut, Event, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::gateway::ensure_not_in_flight;
use crate::password::{init, parse_digest, verify_and_rotate};

use super::record;

pub fn execute_init_password(
    deps: DepsMut,
    info: MessageInfo,
    hash: Binary,
) -> Result<Response, ContractError> {
    ensure_not_in_flight(deps.storage)?;

    let hash = parse_digest(&hash)?;
    let event = init(deps.storage, &info.sender, hash)?;
    record(deps.storage, |stats| stats.initialized_accounts += 1)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "init_password")
        .add_attribute("account", info.sender))
}

pub fn execute_change_password(
    deps: DepsMut,
    info: MessageInfo,
    current_password: String,
    new_hash: Binary,
) -> Result<Response, ContractError> {
    ensure_not_in_flight(deps.storage)?;

    let event = rotate(deps.storage, &info.sender, &current_password, &new_hash)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "change_password")
        .add_attribute("account", info.sender))
}

/// Verify the revealed password and install `new_hash` (shared with withdraw).
pub(super) fn rotate(
    storage: &mut dyn Storage,
    account: &Addr,
    current_password: &str,
    new_hash: &Binary,
) -> Result<Event, ContractError> {
    let new_hash = parse_digest(new_hash)?;
    let event = verify_and_rotate(storage, account, current_password, new_hash)?;
    record(storage, |stats| stats.password_changes += 1)?;
    Ok(event)
}
