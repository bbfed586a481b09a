use crate::errors::SaleError;
use crate::types::{DataKey, SaleConfig};
use soroban_sdk::{Address, Env};

pub fn is_foundation(config: &SaleConfig, caller: &Address) -> bool {
    *caller == config.foundation
}

/// Foundation-only guard for configuration and treasury operations.
pub fn require_foundation(config: &SaleConfig, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    if !is_foundation(config, caller) {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

/// Takes the reentrancy lock for the rest of the invocation.
pub fn enter(env: &Env) -> Result<(), SaleError> {
    let locked: bool = env
        .storage()
        .temporary()
        .get(&DataKey::Lock)
        .unwrap_or(false);
    if locked {
        return Err(SaleError::Reentrant);
    }
    env.storage().temporary().set(&DataKey::Lock, &true);
    Ok(())
}

pub fn exit(env: &Env) {
    env.storage().temporary().remove(&DataKey::Lock);
}
