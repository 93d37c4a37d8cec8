//! Typed events emitted by the safe.
//!
//! Together with the transaction order these form the safe's append-only log.
//! The runtime prefixes custom event types with `wasm-`, so indexers see e.g.
//! `wasm-password_changed`.

use cosmwasm_std::{Addr, Event, Uint128};

use common::{digest_to_hex, Digest};

pub const PASSWORD_INITIALIZED: &str = "password_initialized";
pub const PASSWORD_CHANGED: &str = "password_changed";
pub const TOKEN_DEPOSITED: &str = "token_deposited";
pub const TOKEN_WITHDRAWN: &str = "token_withdrawn";

pub fn password_initialized(account: &Addr, hash: &Digest) -> Event {
    Event::new(PASSWORD_INITIALIZED)
        .add_attribute("account", account)
        .add_attribute("hash", digest_to_hex(hash))
}

pub fn password_changed(account: &Addr, old_hash: &Digest, new_hash: &Digest) -> Event {
    Event::new(PASSWORD_CHANGED)
        .add_attribute("account", account)
        .add_attribute("old_hash", digest_to_hex(old_hash))
        .add_attribute("new_hash", digest_to_hex(new_hash))
}

pub fn token_deposited(account: &Addr, token: &Addr, amount: Uint128) -> Event {
    Event::new(TOKEN_DEPOSITED)
        .add_attribute("account", account)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
}

pub fn token_withdrawn(account: &Addr, token: &Addr, amount: Uint128) -> Event {
    Event::new(TOKEN_WITHDRAWN)
        .add_attribute("account", account)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
}
