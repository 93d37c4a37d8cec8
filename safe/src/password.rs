//! Password state machine.
//!
//! ```text
//! Uninitialized --init--> Initialized(h0) --verify_and_rotate--> Initialized(h1) --> ...
//! ```
//!
//! There is no way back to `Uninitialized` and no way to rotate without
//! revealing the current password.

use cosmwasm_std::{Addr, Binary, Event, StdResult, Storage};

use common::{compute_password_hash, Digest};

use crate::error::ContractError;
use crate::events;
use crate::state::{PasswordRecord, PASSWORDS};

/// Lifecycle state of one account's password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordState {
    Uninitialized,
    Initialized(Digest),
}

impl From<PasswordRecord> for PasswordState {
    fn from(record: PasswordRecord) -> Self {
        if record.initialized {
            PasswordState::Initialized(record.hash)
        } else {
            PasswordState::Uninitialized
        }
    }
}

/// Parse a caller-supplied digest, which must be exactly 32 bytes
pub fn parse_digest(hash: &Binary) -> Result<Digest, ContractError> {
    hash.to_vec()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: hash.len() })
}

/// Load the password state of an account (absent record = uninitialized)
pub fn load_state(storage: &dyn Storage, account: &Addr) -> StdResult<PasswordState> {
    Ok(PASSWORDS
        .may_load(storage, account)?
        .unwrap_or_default()
        .into())
}

/// Register the first password digest of an account.
pub fn init(
    storage: &mut dyn Storage,
    account: &Addr,
    initial_hash: Digest,
) -> Result<Event, ContractError> {
    if let PasswordState::Initialized(_) = load_state(storage, account)? {
        return Err(ContractError::PasswordInitialized {
            account: account.to_string(),
        });
    }

    PASSWORDS.save(
        storage,
        account,
        &PasswordRecord {
            initialized: true,
            hash: initial_hash,
        },
    )?;

    Ok(events::password_initialized(account, &initial_hash))
}

/// Check the revealed password and replace the stored digest with `new_hash`.
///
/// An uninitialized account fails with `PasswordWrong`, same as a bad password.
/// The password is checked before the new digest is compared to the old one.
pub fn verify_and_rotate(
    storage: &mut dyn Storage,
    account: &Addr,
    current_password: &str,
    new_hash: Digest,
) -> Result<Event, ContractError> {
    let old_hash = match load_state(storage, account)? {
        PasswordState::Initialized(hash) if compute_password_hash(current_password) == hash => {
            hash
        }
        _ => {
            return Err(ContractError::PasswordWrong {
                account: account.to_string(),
            })
        }
    };

    if new_hash == old_hash {
        return Err(ContractError::PasswordSame {
            account: account.to_string(),
        });
    }

    PASSWORDS.save(
        storage,
        account,
        &PasswordRecord {
            initialized: true,
            hash: new_hash,
        },
    )?;

    Ok(events::password_changed(account, &old_hash, &new_hash))
}

/// Deposit-path guard: the account must have registered a password.
pub fn require_initialized(storage: &dyn Storage, account: &Addr) -> Result<(), ContractError> {
    match load_state(storage, account)? {
        PasswordState::Initialized(_) => Ok(()),
        PasswordState::Uninitialized => Err(ContractError::PasswordNotInitialized {
            account: account.to_string(),
        }),
    }
}
