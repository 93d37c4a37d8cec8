//! Re-entrancy tests.
//!
//! A hostile token contract calls back into the safe from inside the
//! `TransferFrom`/`Transfer` the safe dispatched. The callback registers a
//! password for the token's own address, which would succeed on its own, so
//! its rejection can only come from the in-flight transfer lock.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128, WasmMsg,
};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use token_safe::compute_password_hash;
use token_safe::msg::{
    ExecuteMsg, InstantiateMsg, PasswordStatusResponse, QueryMsg, TokenBalanceResponse,
};

// ============================================================================
// Hostile Token
// ============================================================================

#[cw_serde]
struct HostileInstantiateMsg {
    safe: String,
}

/// Accepts the two CW20 messages the safe sends, plus a switch to start attacking
#[cw_serde]
enum HostileExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Arm {},
}

const SAFE: Item<Addr> = Item::new("safe");
const ARMED: Item<bool> = Item::new("armed");

fn hostile_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: HostileInstantiateMsg,
) -> StdResult<Response> {
    SAFE.save(deps.storage, &Addr::unchecked(msg.safe))?;
    ARMED.save(deps.storage, &false)?;
    Ok(Response::new())
}

fn hostile_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: HostileExecuteMsg,
) -> StdResult<Response> {
    match msg {
        HostileExecuteMsg::Arm {} => {
            ARMED.save(deps.storage, &true)?;
            Ok(Response::new())
        }
        HostileExecuteMsg::Transfer { .. } | HostileExecuteMsg::TransferFrom { .. } => {
            if !ARMED.load(deps.storage)? {
                return Ok(Response::new().add_attribute("action", "noop_transfer"));
            }

            let safe = SAFE.load(deps.storage)?;
            Ok(Response::new().add_message(WasmMsg::Execute {
                contract_addr: safe.to_string(),
                msg: to_json_binary(&ExecuteMsg::InitPassword {
                    hash: hash("attacker"),
                })?,
                funds: vec![],
            }))
        }
    }
}

fn hostile_query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    Err(StdError::generic_err("hostile token has no queries"))
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_safe() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        token_safe::contract::execute,
        token_safe::contract::instantiate,
        token_safe::contract::query,
    )
    .with_reply(token_safe::contract::reply);
    Box::new(contract)
}

fn contract_hostile() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(hostile_execute, hostile_instantiate, hostile_query);
    Box::new(contract)
}

struct TestEnv {
    app: App,
    safe: Addr,
    token: Addr,
    user: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");

    let safe_code_id = app.store_code(contract_safe());
    let safe = app
        .instantiate_contract(
            safe_code_id,
            admin.clone(),
            &InstantiateMsg {},
            &[],
            "token-safe",
            None,
        )
        .unwrap();

    let hostile_code_id = app.store_code(contract_hostile());
    let token = app
        .instantiate_contract(
            hostile_code_id,
            admin,
            &HostileInstantiateMsg {
                safe: safe.to_string(),
            },
            &[],
            "hostile-token",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        safe,
        token,
        user,
    }
}

fn hash(password: &str) -> Binary {
    Binary::from(compute_password_hash(password).to_vec())
}

impl TestEnv {
    fn safe_balance(&self) -> u128 {
        let res: TokenBalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.safe.clone(),
                &QueryMsg::TokenBalance {
                    account: self.user.to_string(),
                    token: self.token.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    fn password_status(&self, account: &Addr) -> PasswordStatusResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.safe.clone(),
                &QueryMsg::PasswordStatus {
                    account: account.to_string(),
                },
            )
            .unwrap()
    }

    fn deposit(&mut self, amount: u128) -> anyhow::Result<cw_multi_test::AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.safe.clone(),
            &ExecuteMsg::DepositToken {
                token: self.token.to_string(),
                amount: Uint128::from(amount),
            },
            &[],
        )
    }

    fn arm(&mut self) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &HostileExecuteMsg::Arm {},
                &[],
            )
            .unwrap();
    }
}

/// User with password "p1" and 1000 hostile tokens credited while unarmed
fn setup_funded() -> TestEnv {
    let mut env = setup();
    env.app
        .execute_contract(
            env.user.clone(),
            env.safe.clone(),
            &ExecuteMsg::InitPassword { hash: hash("p1") },
            &[],
        )
        .unwrap();
    env.deposit(1_000).unwrap();
    assert_eq!(env.safe_balance(), 1_000);
    env
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_callback_rejected_during_withdraw() {
    let mut env = setup_funded();
    env.arm();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.safe.clone(),
        &ExecuteMsg::WithdrawToken {
            token: env.token.to_string(),
            amount: Uint128::from(400u128),
            current_password: "p1".to_string(),
            new_hash: hash("p2"),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert_eq!(
        err_str,
        "Reentrant call rejected: a token transfer is in flight"
    );

    // Rotation and debit were reverted with the failed transfer
    assert_eq!(env.safe_balance(), 1_000);
    assert_eq!(env.password_status(&env.user).hash, Some(hash("p1")));
    assert!(!env.password_status(&env.token).initialized);
}

#[test]
fn test_callback_rejected_during_deposit() {
    let mut env = setup_funded();
    env.arm();

    let res = env.deposit(500);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert_eq!(
        err_str,
        "Reentrant call rejected: a token transfer is in flight"
    );

    assert_eq!(env.safe_balance(), 1_000);
    assert!(!env.password_status(&env.token).initialized);
}

#[test]
fn test_lock_released_after_successful_transfer() {
    let mut env = setup_funded();

    // Unarmed transfers complete, so the lock must be gone afterwards
    env.app
        .execute_contract(
            env.user.clone(),
            env.safe.clone(),
            &ExecuteMsg::WithdrawToken {
                token: env.token.to_string(),
                amount: Uint128::from(400u128),
                current_password: "p1".to_string(),
                new_hash: hash("p2"),
            },
            &[],
        )
        .unwrap();
    assert_eq!(env.safe_balance(), 600);

    let token = env.token.clone();
    env.app
        .execute_contract(
            token.clone(),
            env.safe.clone(),
            &ExecuteMsg::InitPassword {
                hash: hash("attacker"),
            },
            &[],
        )
        .unwrap();
    assert!(env.password_status(&token).initialized);
}
