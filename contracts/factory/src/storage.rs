// Factory storage module for BelugaLaunch

use soroban_sdk::{contracttype, Address, Env, Vec};

use belugalaunch_common::LaunchConfig;
use crate::types::{FeeTier, LaunchInfo};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Live launch configuration
    Config,
    /// Factory admin
    Admin,
    /// Initialization flag
    Initialized,
    /// Fee tier by fee_bps
    FeeTier(u32),
    /// Launch by token
    Launch(Address),
    /// All launched tokens, in registration order
    LaunchList,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;
/// Instance lifetime (~30 days)
const INSTANCE_LIFETIME: u32 = 518_400;
const INSTANCE_BUMP: u32 = 518_400;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME, INSTANCE_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ============================================================
// CONFIG & ADMIN
// ============================================================

pub fn read_config(env: &Env) -> Option<LaunchConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &LaunchConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// ============================================================
// FEE TIERS
// ============================================================

pub fn write_fee_tier(env: &Env, fee_bps: u32, tier: &FeeTier) {
    let key = DataKey::FeeTier(fee_bps);
    env.storage().persistent().set(&key, tier);
    extend_ttl(env, &key);
}

pub fn read_fee_tier(env: &Env, fee_bps: u32) -> Option<FeeTier> {
    env.storage().persistent().get(&DataKey::FeeTier(fee_bps))
}

// ============================================================
// LAUNCH REGISTRY
// ============================================================

pub fn read_launch(env: &Env, token: &Address) -> Option<LaunchInfo> {
    env.storage().persistent().get(&DataKey::Launch(token.clone()))
}

pub fn write_launch(env: &Env, info: &LaunchInfo) {
    let key = DataKey::Launch(info.token.clone());
    env.storage().persistent().set(&key, info);
    extend_ttl(env, &key);
}

pub fn read_launch_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::LaunchList)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_to_launch_list(env: &Env, token: &Address) -> u32 {
    let mut list = read_launch_list(env);
    let index = list.len();
    list.push_back(token.clone());
    env.storage().persistent().set(&DataKey::LaunchList, &list);
    extend_ttl(env, &DataKey::LaunchList);
    index
}
