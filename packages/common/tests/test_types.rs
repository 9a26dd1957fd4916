use belugalaunch_common::*;
use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env, Symbol};

#[contract]
pub struct Host;

#[contractimpl]
impl Host {
    pub fn ping(_env: Env) -> u32 {
        1
    }
}

fn sorted_pair(env: &Env) -> (Address, Address) {
    let a = Address::generate(env);
    let b = Address::generate(env);
    if a < b { (a, b) } else { (b, a) }
}

// ============================================================
// POOL KEY
// ============================================================

#[test]
fn test_pool_key_sorts_currencies() {
    let env = Env::default();
    let (low, high) = sorted_pair(&env);
    let hooks = Address::generate(&env);

    let forward = PoolKey::new(low.clone(), high.clone(), 30, 60, hooks.clone());
    let reversed = PoolKey::new(high.clone(), low.clone(), 30, 60, hooks);

    assert_eq!(forward, reversed);
    assert_eq!(forward.currency0, low);
    assert_eq!(forward.currency1, high);
    assert!(forward.is_valid());
}

#[test]
fn test_pool_id_depends_on_every_field() {
    let env = Env::default();
    let (low, high) = sorted_pair(&env);
    let hooks = Address::generate(&env);

    let key = PoolKey::new(low.clone(), high.clone(), 30, 60, hooks.clone());
    let same = PoolKey::new(low.clone(), high.clone(), 30, 60, hooks.clone());
    let other_fee = PoolKey::new(low.clone(), high.clone(), 100, 60, hooks.clone());
    let other_hooks = PoolKey::new(low, high, 30, 60, Address::generate(&env));

    assert_eq!(key.pool_id(&env), same.pool_id(&env));
    assert_ne!(key.pool_id(&env), other_fee.pool_id(&env));
    assert_ne!(key.pool_id(&env), other_hooks.pool_id(&env));
}

#[test]
fn test_pool_key_validation() {
    let env = Env::default();
    let (low, high) = sorted_pair(&env);
    let hooks = Address::generate(&env);

    let unsorted = PoolKey {
        currency0: high.clone(),
        currency1: low.clone(),
        fee_bps: 30,
        tick_spacing: 60,
        hooks: hooks.clone(),
    };
    assert!(!unsorted.is_valid());

    assert!(!PoolKey::new(low.clone(), high.clone(), 30, 0, hooks.clone()).is_valid());
    assert!(!PoolKey::new(low.clone(), high.clone(), 30, 16_385, hooks.clone()).is_valid());
    assert!(!PoolKey::new(low.clone(), high.clone(), 10_000, 60, hooks.clone()).is_valid());
    assert!(PoolKey::new(low, high, 9_999, 16_384, hooks).is_valid());
}

#[test]
fn test_direction_helpers() {
    let env = Env::default();
    let (low, high) = sorted_pair(&env);
    let key = PoolKey::new(low.clone(), high.clone(), 30, 60, Address::generate(&env));

    assert_eq!(key.input_currency(true), low);
    assert_eq!(key.output_currency(true), high);
    assert_eq!(key.input_currency(false), high);

    let delta = BalanceDelta::new(-5, 7);
    assert_eq!(delta.by_direction(true), (-5, 7));
    assert_eq!(delta.by_direction(false), (7, -5));
}

// ============================================================
// REENTRANCY GUARD
// ============================================================

#[test]
fn test_guard_blocks_second_entry() {
    let env = Env::default();
    let host = env.register(Host, ());
    let key = Symbol::new(&env, "Guard");

    env.as_contract(&host, || {
        assert!(!ReentrancyGuard::is_locked(&env, &key));
        assert!(ReentrancyGuard::enter(&env, &key));
        assert!(ReentrancyGuard::is_locked(&env, &key));
        assert!(!ReentrancyGuard::enter(&env, &key));
        ReentrancyGuard::exit(&env, &key);
        assert!(ReentrancyGuard::enter(&env, &key));
    });
}
