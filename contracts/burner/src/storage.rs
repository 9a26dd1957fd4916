use soroban_sdk::{contracttype, Address, Env};

use crate::types::BurnerConfig;

const INSTANCE_TTL: u32 = 518_400; // ~30 days
const INSTANCE_THRESHOLD: u32 = INSTANCE_TTL - 17_280;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    Pending,
    Paused,
    Flushing,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_THRESHOLD, INSTANCE_TTL);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_config(env: &Env) -> Option<BurnerConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &BurnerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_pending(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Pending).unwrap_or(0)
}

pub fn write_pending(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Pending, &amount);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_flushing(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Flushing).unwrap_or(false)
}

pub fn set_flushing(env: &Env, flushing: bool) {
    env.storage().instance().set(&DataKey::Flushing, &flushing);
}
