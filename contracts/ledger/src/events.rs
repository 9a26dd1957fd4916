// Ledger events

use soroban_sdk::{Address, BytesN, Env, Symbol};

use belugalaunch_common::{BalanceDelta, PoolKey};

/// Topics: ("Initialize", pool_id)
/// Data: (key, sqrt_price_x64, tick)
pub fn emit_pool_initialized(env: &Env, pool_id: &BytesN<32>, key: &PoolKey, sqrt_price_x64: u128, tick: i32) {
    env.events().publish(
        (Symbol::new(env, "Initialize"), pool_id.clone()),
        (key.clone(), sqrt_price_x64, tick),
    );
}

/// Topics: ("Unlock", locker)
pub fn emit_unlocked(env: &Env, locker: &Address, nonce: u64) {
    env.events().publish((Symbol::new(env, "Unlock"), locker.clone()), nonce);
}

/// Topics: ("Lock", locker)
pub fn emit_locked(env: &Env, locker: &Address, nonce: u64) {
    env.events().publish((Symbol::new(env, "Lock"), locker.clone()), nonce);
}

/// Topics: ("ModifyLiquidity", pool_id, owner)
/// Data: (tick_lower, tick_upper, liquidity_delta, caller delta)
pub fn emit_modify_liquidity(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
    delta: &BalanceDelta,
) {
    env.events().publish(
        (Symbol::new(env, "ModifyLiquidity"), pool_id.clone(), owner.clone()),
        (tick_lower, tick_upper, liquidity_delta, *delta),
    );
}

/// Topics: ("Swap", pool_id, sender)
/// Data: (delta, fee_paid, sqrt_price_x64, liquidity, tick)
pub fn emit_swap(
    env: &Env,
    pool_id: &BytesN<32>,
    sender: &Address,
    delta: &BalanceDelta,
    fee_paid: i128,
    sqrt_price_x64: u128,
    liquidity: i128,
    tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), pool_id.clone(), sender.clone()),
        (*delta, fee_paid, sqrt_price_x64, liquidity, tick),
    );
}
