use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_schedule(env: &Env) -> Option<SaleSchedule> {
    env.storage().instance().get(&DataKey::Schedule)
}

pub fn set_schedule(env: &Env, schedule: &SaleSchedule) {
    env.storage().instance().set(&DataKey::Schedule, schedule);
}

pub fn get_total_allocated(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAllocated)
        .unwrap_or(0)
}

pub fn set_total_allocated(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalAllocated, &amount);
}

pub fn get_total_withdrawn(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalWithdrawn)
        .unwrap_or(0)
}

pub fn set_total_withdrawn(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalWithdrawn, &amount);
}

pub fn get_vesting(env: &Env, participant: &Address) -> Option<ParticipantVesting> {
    env.storage()
        .persistent()
        .get(&DataKey::Vesting(participant.clone()))
}

pub fn set_vesting(env: &Env, participant: &Address, vesting: &ParticipantVesting) {
    env.storage()
        .persistent()
        .set(&DataKey::Vesting(participant.clone()), vesting);
}

pub fn is_whitelisted(env: &Env, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(participant.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, participant: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(participant.clone()), &true);
}
