//! Execute handlers for the Token Safe contract.
//!
//! - `password` - InitPassword and ChangePassword
//! - `token` - DepositToken, WithdrawToken and the transfer confirmations
//!   delivered through `reply`

mod password;
mod token;

pub use password::*;
pub use token::*;

use cosmwasm_std::{StdResult, Storage};

use crate::state::{Stats, STATS};

fn record(storage: &mut dyn Storage, update: impl FnOnce(&mut Stats)) -> StdResult<()> {
    STATS.update(storage, |mut stats| -> StdResult<_> {
        update(&mut stats);
        Ok(stats)
    })?;
    Ok(())
}
