//! Transfer gateway to the external CW20 token contracts.
//!
//! Transfers are dispatched as `reply_on_success` sub-messages. Until the reply
//! arrives the transfer is recorded in `IN_FLIGHT`, and every execute entry
//! point refuses to run. A token that calls back into the safe mid-transfer
//! therefore fails, and its failure reverts the whole transaction.
//!
//! Token errors are never caught: a failed `TransferFrom`/`Transfer` aborts the
//! enclosing operation with the token contract's own error.

use cosmwasm_std::{to_json_binary, Addr, StdResult, Storage, SubMsg, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{PendingTransfer, TransferKind, IN_FLIGHT};

/// Reply id for `TransferFrom` into the safe
pub const DEPOSIT_REPLY_ID: u64 = 1;

/// Reply id for `Transfer` out of the safe
pub const WITHDRAW_REPLY_ID: u64 = 2;

/// Fail if a transfer dispatched by the safe has not completed yet.
pub fn ensure_not_in_flight(storage: &dyn Storage) -> Result<(), ContractError> {
    if IN_FLIGHT.may_load(storage)?.is_some() {
        return Err(ContractError::Reentrancy);
    }
    Ok(())
}

/// Pull `amount` of `token` from `owner` into the safe.
///
/// Requires a prior CW20 allowance from `owner` to the safe.
pub fn pull(
    storage: &mut dyn Storage,
    safe: &Addr,
    owner: &Addr,
    token: &Addr,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    let msg = Cw20ExecuteMsg::TransferFrom {
        owner: owner.to_string(),
        recipient: safe.to_string(),
        amount,
    };
    dispatch(
        storage,
        PendingTransfer {
            kind: TransferKind::Deposit,
            account: owner.clone(),
            token: token.clone(),
            amount,
        },
        msg,
        DEPOSIT_REPLY_ID,
    )
}

/// Pay `amount` of `token` out of the safe to `recipient`.
pub fn push(
    storage: &mut dyn Storage,
    recipient: &Addr,
    token: &Addr,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    let msg = Cw20ExecuteMsg::Transfer {
        recipient: recipient.to_string(),
        amount,
    };
    dispatch(
        storage,
        PendingTransfer {
            kind: TransferKind::Withdraw,
            account: recipient.clone(),
            token: token.clone(),
            amount,
        },
        msg,
        WITHDRAW_REPLY_ID,
    )
}

/// Release the lock after a successful transfer and return what was in flight.
pub fn complete(storage: &mut dyn Storage, reply_id: u64) -> Result<PendingTransfer, ContractError> {
    let expected = match reply_id {
        DEPOSIT_REPLY_ID => TransferKind::Deposit,
        WITHDRAW_REPLY_ID => TransferKind::Withdraw,
        id => return Err(ContractError::UnknownReplyId { id }),
    };

    let pending = IN_FLIGHT
        .may_load(storage)?
        .ok_or(ContractError::NoTransferInFlight)?;
    if pending.kind != expected {
        return Err(ContractError::UnknownReplyId { id: reply_id });
    }

    IN_FLIGHT.remove(storage);
    Ok(pending)
}

fn dispatch(
    storage: &mut dyn Storage,
    pending: PendingTransfer,
    msg: Cw20ExecuteMsg,
    reply_id: u64,
) -> Result<SubMsg, ContractError> {
    ensure_not_in_flight(storage)?;
    let wasm_msg = cw20_execute(&pending.token, &msg)?;
    IN_FLIGHT.save(storage, &pending)?;
    Ok(SubMsg::reply_on_success(wasm_msg, reply_id))
}

fn cw20_execute(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::{from_json, CosmosMsg, ReplyOn};

    #[test]
    fn test_pull_builds_transfer_from_and_locks() {
        let mut deps = mock_dependencies();
        let safe = Addr::unchecked("safe");
        let owner = Addr::unchecked("user1");
        let token = Addr::unchecked("token1");

        ensure_not_in_flight(deps.as_ref().storage).unwrap();
        let sub = pull(deps.as_mut().storage, &safe, &owner, &token, Uint128::from(42u128)).unwrap();

        assert_eq!(sub.id, DEPOSIT_REPLY_ID);
        assert_eq!(sub.reply_on, ReplyOn::Success);
        match sub.msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "token1");
                assert!(funds.is_empty());
                assert_eq!(
                    from_json::<Cw20ExecuteMsg>(&msg).unwrap(),
                    Cw20ExecuteMsg::TransferFrom {
                        owner: "user1".to_string(),
                        recipient: "safe".to_string(),
                        amount: Uint128::from(42u128),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }

        assert_eq!(
            ensure_not_in_flight(deps.as_ref().storage).unwrap_err(),
            ContractError::Reentrancy
        );
    }

    #[test]
    fn test_second_dispatch_rejected_while_in_flight() {
        let mut deps = mock_dependencies();
        let user = Addr::unchecked("user1");
        let token = Addr::unchecked("token1");

        push(deps.as_mut().storage, &user, &token, Uint128::from(1u128)).unwrap();
        assert_eq!(
            push(deps.as_mut().storage, &user, &token, Uint128::from(1u128)).unwrap_err(),
            ContractError::Reentrancy
        );
    }

    #[test]
    fn test_complete_releases_lock() {
        let mut deps = mock_dependencies();
        let user = Addr::unchecked("user1");
        let token = Addr::unchecked("token1");

        push(deps.as_mut().storage, &user, &token, Uint128::from(7u128)).unwrap();

        // Mismatched reply id keeps the lock
        assert_eq!(
            complete(deps.as_mut().storage, DEPOSIT_REPLY_ID).unwrap_err(),
            ContractError::UnknownReplyId {
                id: DEPOSIT_REPLY_ID
            }
        );

        let pending = complete(deps.as_mut().storage, WITHDRAW_REPLY_ID).unwrap();
        assert_eq!(pending.kind, TransferKind::Withdraw);
        assert_eq!(pending.account, user);
        assert_eq!(pending.amount, Uint128::from(7u128));
        ensure_not_in_flight(deps.as_ref().storage).unwrap();

        assert_eq!(
            complete(deps.as_mut().storage, WITHDRAW_REPLY_ID).unwrap_err(),
            ContractError::NoTransferInFlight
        );
        assert_eq!(
            complete(deps.as_mut().storage, 99).unwrap_err(),
            ContractError::UnknownReplyId { id: 99 }
        );
    }
}
