use belugalaunch_math::{get_sqrt_ratio_at_tick, MAX_SQRT_PRICE, MIN_SQRT_PRICE, MIN_TICK, SQRT_PRICE_1_1};
use belugalaunch_swap::*;
use belugalaunch_tick::{update_tick, TickInfo, TickStore};
use soroban_sdk::{vec, Env, Map, Vec};

const FEE_BPS: u32 = 30;
const LIQUIDITY: i128 = 1_000_000_000;

#[derive(Clone)]
struct MapStore {
    ticks: Map<i32, TickInfo>,
}

impl TickStore for MapStore {
    fn read_tick(&self, tick: i32) -> TickInfo {
        self.ticks.get(tick).unwrap_or_default()
    }

    fn write_tick(&mut self, tick: i32, info: &TickInfo) {
        self.ticks.set(tick, info.clone());
    }
}

/// One position over [-600, 600] at price 1.0
fn setup(env: &Env) -> (SwapState, MapStore, Vec<i32>) {
    let mut store = MapStore { ticks: Map::new(env) };
    update_tick(&mut store, -600, 0, LIQUIDITY, 0, 0, false);
    update_tick(&mut store, 600, 0, LIQUIDITY, 0, 0, true);
    let state = SwapState {
        sqrt_price_x64: SQRT_PRICE_1_1,
        tick: 0,
        liquidity: LIQUIDITY,
        fee_growth_global_0: 0,
        fee_growth_global_1: 0,
    };
    (state, store, vec![env, -600, 600])
}

// ============================================================
// PRICE LIMIT
// ============================================================

#[test]
fn test_resolve_price_limit() {
    assert_eq!(resolve_price_limit(SQRT_PRICE_1_1, 0, true), Ok(MIN_SQRT_PRICE + 1));
    assert_eq!(resolve_price_limit(SQRT_PRICE_1_1, 0, false), Ok(MAX_SQRT_PRICE - 1));
    assert_eq!(resolve_price_limit(SQRT_PRICE_1_1, SQRT_PRICE_1_1 - 1, true), Ok(SQRT_PRICE_1_1 - 1));
    assert_eq!(
        resolve_price_limit(SQRT_PRICE_1_1, SQRT_PRICE_1_1, true),
        Err(SwapError::PriceLimitOutOfBounds)
    );
    assert_eq!(
        resolve_price_limit(SQRT_PRICE_1_1, SQRT_PRICE_1_1 - 1, false),
        Err(SwapError::PriceLimitOutOfBounds)
    );
    assert_eq!(
        resolve_price_limit(SQRT_PRICE_1_1, MAX_SQRT_PRICE, false),
        Err(SwapError::PriceLimitOutOfBounds)
    );
}

// ============================================================
// SWAP STEP
// ============================================================

#[test]
fn test_step_consumes_everything_before_target() {
    let env = Env::default();
    let target = get_sqrt_ratio_at_tick(&env, -600);
    let step = compute_swap_step(&env, SQRT_PRICE_1_1, target, LIQUIDITY as u128, 10_000, FEE_BPS);
    assert_eq!(step.amount_in + step.fee_amount, 10_000);
    assert!(step.sqrt_price_next > target);
    assert!(step.amount_out > 0 && step.amount_out < 10_000);
}

#[test]
fn test_step_stops_at_target() {
    let env = Env::default();
    let target = get_sqrt_ratio_at_tick(&env, -10);
    let step = compute_swap_step(&env, SQRT_PRICE_1_1, target, LIQUIDITY as u128, 1_000_000_000, FEE_BPS);
    assert_eq!(step.sqrt_price_next, target);
    assert!(step.amount_in + step.fee_amount < 1_000_000_000);
    assert!(step.fee_amount > 0);
}

#[test]
fn test_step_without_liquidity_jumps() {
    let env = Env::default();
    let target = get_sqrt_ratio_at_tick(&env, 60);
    let step = compute_swap_step(&env, SQRT_PRICE_1_1, target, 0, 1_000, FEE_BPS);
    assert_eq!(step, SwapStep { sqrt_price_next: target, amount_in: 0, amount_out: 0, fee_amount: 0 });
}

// ============================================================
// SWAP LOOP
// ============================================================

#[test]
fn test_swap_within_range_fills_completely() {
    let env = Env::default();
    let (mut state, mut store, index) = setup(&env);

    let out = execute_swap(&env, &mut state, &mut store, &index, true, 1_000_000, MIN_SQRT_PRICE + 1, FEE_BPS).unwrap();
    assert_eq!(out.amount_in, 1_000_000);
    assert!(out.amount_out > 0 && out.amount_out < 1_000_000);
    assert!(out.fee_paid >= 3_000);
    assert!(state.sqrt_price_x64 < SQRT_PRICE_1_1);
    assert_eq!(state.liquidity, LIQUIDITY);
    assert!(state.fee_growth_global_0 > 0);
    assert_eq!(state.fee_growth_global_1, 0);
}

#[test]
fn test_swap_one_for_zero_moves_price_up() {
    let env = Env::default();
    let (mut state, mut store, index) = setup(&env);

    let out = execute_swap(&env, &mut state, &mut store, &index, false, 1_000_000, MAX_SQRT_PRICE - 1, FEE_BPS).unwrap();
    assert_eq!(out.amount_in, 1_000_000);
    assert!(state.sqrt_price_x64 > SQRT_PRICE_1_1);
    assert!(state.tick >= 0);
    assert!(state.fee_growth_global_1 > 0);
}

#[test]
fn test_swap_through_last_tick_leaves_input_unconsumed() {
    let env = Env::default();
    let (mut state, mut store, index) = setup(&env);

    let out = execute_swap(&env, &mut state, &mut store, &index, true, 1_000_000_000, MIN_SQRT_PRICE + 1, FEE_BPS).unwrap();
    assert!(out.amount_in < 1_000_000_000);
    assert_eq!(state.liquidity, 0);
    assert_eq!(state.sqrt_price_x64, MIN_SQRT_PRICE + 1);
    assert_eq!(state.tick, MIN_TICK);
}

#[test]
fn test_swap_stops_at_limit() {
    let env = Env::default();
    let (mut state, mut store, index) = setup(&env);
    let limit = get_sqrt_ratio_at_tick(&env, -100);

    let out = execute_swap(&env, &mut state, &mut store, &index, true, 1_000_000_000, limit, FEE_BPS).unwrap();
    assert!(out.amount_in < 1_000_000_000);
    assert_eq!(state.sqrt_price_x64, limit);
    assert_eq!(state.tick, -100);
}

#[test]
fn test_limit_at_reached_price_reproduces_fill() {
    let env = Env::default();
    let (state, store, index) = setup(&env);

    for amount in [1i128, 997, 1_000_000, 25_000_000] {
        for zero_for_one in [true, false] {
            let default_limit = resolve_price_limit(state.sqrt_price_x64, 0, zero_for_one).unwrap();

            let mut quoted_state = state.clone();
            let mut quoted_store = store.clone();
            let quoted = execute_swap(
                &env, &mut quoted_state, &mut quoted_store, &index, zero_for_one, amount, default_limit, FEE_BPS,
            ).unwrap();

            if quoted.sqrt_price_x64 == state.sqrt_price_x64 {
                continue;
            }

            let mut exec_state = state.clone();
            let mut exec_store = store.clone();
            let executed = execute_swap(
                &env, &mut exec_state, &mut exec_store, &index, zero_for_one, amount, quoted.sqrt_price_x64, FEE_BPS,
            ).unwrap();

            assert_eq!(executed, quoted);
            assert_eq!(exec_state, quoted_state);
        }
    }
}

#[test]
fn test_zero_amount_rejected() {
    let env = Env::default();
    let (mut state, mut store, index) = setup(&env);
    assert_eq!(
        execute_swap(&env, &mut state, &mut store, &index, true, 0, MIN_SQRT_PRICE + 1, FEE_BPS),
        Err(SwapError::InvalidAmount)
    );
}
