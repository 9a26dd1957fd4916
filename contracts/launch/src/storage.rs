use soroban_sdk::{contracttype, Env};

use crate::types::{LaunchState, Phase};

const INSTANCE_TTL: u32 = 518_400; // ~30 days
const INSTANCE_THRESHOLD: u32 = INSTANCE_TTL - 17_280;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    State,
    Phase,
    PendingRewards,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_THRESHOLD, INSTANCE_TTL);
}

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn read_state(env: &Env) -> Option<LaunchState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn write_state(env: &Env, state: &LaunchState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn read_phase(env: &Env) -> Phase {
    env.storage().instance().get(&DataKey::Phase).unwrap_or(Phase::Uninitialized)
}

pub fn write_phase(env: &Env, phase: Phase) {
    env.storage().instance().set(&DataKey::Phase, &phase);
}

pub fn read_pending_rewards(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::PendingRewards).unwrap_or(0)
}

pub fn write_pending_rewards(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::PendingRewards, &amount);
}
