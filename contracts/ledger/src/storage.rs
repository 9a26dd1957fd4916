// Ledger storage module
//
// Instance storage carries the session; everything keyed by pool lives
// in persistent storage.

use soroban_sdk::{contracttype, Address, BytesN, Env, Map, Vec};

use belugalaunch_common::Slot0;
use belugalaunch_position::Position;
use belugalaunch_tick::TickInfo;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Open session, if any
    Session,
    /// Last issued session nonce
    Nonce,
    /// Tracked balance per currency
    Reserves(Address),
    /// Slot0 by pool id
    Pool(BytesN<32>),
    /// Tick data by (pool id, tick)
    Tick(BytesN<32>, i32),
    /// Sorted initialized ticks by pool id
    TickIndex(BytesN<32>),
    /// Position by (pool id, owner, lower, upper)
    Position(BytesN<32>, Address, i32, i32),
}

/// An open unlock session
#[contracttype]
#[derive(Clone, Debug)]
pub struct Session {
    pub locker: Address,
    pub token: BytesN<32>,
    pub nonce: u64,
    /// Currency deltas from the locker's side
    pub deltas: Map<Address, i128>,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

pub mod storage_ttl {
    /// About one year at 5s per ledger
    pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 6_307_200;
    pub const PERSISTENT_BUMP_AMOUNT: u32 = 6_307_200;
    /// About 30 days
    pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 518_400;
    pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        storage_ttl::PERSISTENT_LIFETIME_THRESHOLD,
        storage_ttl::PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(
        storage_ttl::INSTANCE_LIFETIME_THRESHOLD,
        storage_ttl::INSTANCE_BUMP_AMOUNT,
    );
}

// ============================================================
// SESSION
// ============================================================

pub fn read_session(env: &Env) -> Option<Session> {
    env.storage().instance().get(&DataKey::Session)
}

pub fn write_session(env: &Env, session: &Session) {
    env.storage().instance().set(&DataKey::Session, session);
}

pub fn clear_session(env: &Env) {
    env.storage().instance().remove(&DataKey::Session);
}

/// Bump and return the session nonce
pub fn next_nonce(env: &Env) -> u64 {
    let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0) + 1;
    env.storage().instance().set(&DataKey::Nonce, &nonce);
    nonce
}

// ============================================================
// RESERVES
// ============================================================

pub fn read_reserves(env: &Env, currency: &Address) -> i128 {
    let key = DataKey::Reserves(currency.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_reserves(env: &Env, currency: &Address, amount: i128) {
    let key = DataKey::Reserves(currency.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

// ============================================================
// POOL STATE
// ============================================================

pub fn has_pool(env: &Env, pool_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Pool(pool_id.clone()))
}

pub fn read_slot0(env: &Env, pool_id: &BytesN<32>) -> Option<Slot0> {
    env.storage().persistent().get(&DataKey::Pool(pool_id.clone()))
}

pub fn write_slot0(env: &Env, pool_id: &BytesN<32>, slot0: &Slot0) {
    let key = DataKey::Pool(pool_id.clone());
    env.storage().persistent().set(&key, slot0);
    extend_persistent_ttl(env, &key);
}

// ============================================================
// TICKS
// ============================================================

pub fn read_tick_info(env: &Env, pool_id: &BytesN<32>, tick: i32) -> TickInfo {
    env.storage()
        .persistent()
        .get(&DataKey::Tick(pool_id.clone(), tick))
        .unwrap_or_default()
}

/// Write a tick, dropping the entry once it is back to default
pub fn write_tick_info(env: &Env, pool_id: &BytesN<32>, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(pool_id.clone(), tick);
    if *info == TickInfo::default() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, info);
        extend_persistent_ttl(env, &key);
    }
}

pub fn read_tick_index(env: &Env, pool_id: &BytesN<32>) -> Vec<i32> {
    env.storage()
        .persistent()
        .get(&DataKey::TickIndex(pool_id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_tick_index(env: &Env, pool_id: &BytesN<32>, index: &Vec<i32>) {
    let key = DataKey::TickIndex(pool_id.clone());
    env.storage().persistent().set(&key, index);
    extend_persistent_ttl(env, &key);
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_position(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    lower: i32,
    upper: i32,
) -> Position {
    env.storage()
        .persistent()
        .get(&DataKey::Position(pool_id.clone(), owner.clone(), lower, upper))
        .unwrap_or_default()
}

pub fn write_position(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    lower: i32,
    upper: i32,
    pos: &Position,
) {
    let key = DataKey::Position(pool_id.clone(), owner.clone(), lower, upper);
    env.storage().persistent().set(&key, pos);
    extend_persistent_ttl(env, &key);
}
