use soroban_sdk::{Env, Vec};
use belugalaunch_math::{
    constants::{BPS_DENOMINATOR, MAX_SQRT_PRICE, MAX_SWAP_ITERATIONS, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK, Q64},
    div_round_up, get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, i128_to_u128_safe, mul_div,
    u128_to_i128_saturating,
};
use belugalaunch_tick::{cross_tick, next_initialized_tick, TickStore};

use crate::types::{SwapError, SwapOutcome, SwapState, SwapStep};

// ============================================================
// PRICE LIMIT
// ============================================================

/// Resolve the caller's price limit. Zero selects the directional extreme;
/// anything at or behind the current price, or outside the bounds, is rejected.
pub fn resolve_price_limit(
    sqrt_price_x64: u128,
    sqrt_price_limit_x64: u128,
    zero_for_one: bool,
) -> Result<u128, SwapError> {
    if sqrt_price_limit_x64 == 0 {
        return Ok(if zero_for_one { MIN_SQRT_PRICE + 1 } else { MAX_SQRT_PRICE - 1 });
    }

    let valid = if zero_for_one {
        sqrt_price_limit_x64 < sqrt_price_x64 && sqrt_price_limit_x64 > MIN_SQRT_PRICE
    } else {
        sqrt_price_limit_x64 > sqrt_price_x64 && sqrt_price_limit_x64 < MAX_SQRT_PRICE
    };

    if valid {
        Ok(sqrt_price_limit_x64)
    } else {
        Err(SwapError::PriceLimitOutOfBounds)
    }
}

// ============================================================
// SWAP STEP
// ============================================================

/// Compute one exact-input step from `sqrt_price` toward `sqrt_target`.
///
/// If spending everything that remains would carry the price strictly past
/// the target, the step stops at the target and pays the rounded-up input
/// for that interval. Otherwise the whole remainder is consumed, so a limit
/// equal to the price an input reaches on its own fills that input in full.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price: u128,
    sqrt_target: u128,
    liquidity: u128,
    amount_remaining: u128,
    fee_bps: u32,
) -> SwapStep {
    let zero_for_one = sqrt_price >= sqrt_target;

    if liquidity == 0 {
        return SwapStep { sqrt_price_next: sqrt_target, amount_in: 0, amount_out: 0, fee_amount: 0 };
    }

    let fee_complement = (BPS_DENOMINATOR - fee_bps) as u128;
    let remaining_less_fee = mul_div(env, amount_remaining, fee_complement, BPS_DENOMINATOR as u128);

    let next_from_input = get_next_sqrt_price_from_input(
        env, sqrt_price, liquidity, remaining_less_fee, zero_for_one,
    );

    let passes_target = if zero_for_one {
        next_from_input < sqrt_target
    } else {
        next_from_input > sqrt_target
    };

    let sqrt_price_next = if passes_target { sqrt_target } else { next_from_input };

    let (amount_in, amount_out) = if zero_for_one {
        (
            get_amount_0_delta(env, sqrt_price_next, sqrt_price, liquidity, true),
            get_amount_1_delta(env, sqrt_price_next, sqrt_price, liquidity, false),
        )
    } else {
        (
            get_amount_1_delta(env, sqrt_price, sqrt_price_next, liquidity, true),
            get_amount_0_delta(env, sqrt_price, sqrt_price_next, liquidity, false),
        )
    };
    let amount_in = amount_in.min(amount_remaining);

    let fee_amount = if passes_target {
        let fee = div_round_up(amount_in.saturating_mul(fee_bps as u128), fee_complement);
        fee.min(amount_remaining - amount_in)
    } else {
        amount_remaining - amount_in
    };

    SwapStep { sqrt_price_next, amount_in, amount_out, fee_amount }
}

// ============================================================
// SWAP LOOP
// ============================================================

/// Execute an exact-input swap against `state`, crossing initialized ticks
/// from `tick_index` and writing crossed ticks through `store`.
///
/// `sqrt_price_limit_x64` must already be resolved (see `resolve_price_limit`).
pub fn execute_swap<S: TickStore>(
    env: &Env,
    state: &mut SwapState,
    store: &mut S,
    tick_index: &Vec<i32>,
    zero_for_one: bool,
    amount_in: i128,
    sqrt_price_limit_x64: u128,
    fee_bps: u32,
) -> Result<SwapOutcome, SwapError> {
    if amount_in <= 0 {
        return Err(SwapError::InvalidAmount);
    }

    let mut remaining = i128_to_u128_safe(amount_in);
    let mut amount_out: u128 = 0;
    let mut fee_paid: u128 = 0;
    let mut iterations = 0;

    while remaining > 0
        && state.sqrt_price_x64 != sqrt_price_limit_x64
        && iterations < MAX_SWAP_ITERATIONS
    {
        iterations += 1;

        let next = next_initialized_tick(tick_index, state.tick, zero_for_one);
        let tick_next = match next {
            Some(t) => t,
            None if zero_for_one => MIN_TICK,
            None => MAX_TICK,
        };
        let sqrt_at_tick = get_sqrt_ratio_at_tick(env, tick_next);

        let sqrt_target = if zero_for_one {
            sqrt_at_tick.max(sqrt_price_limit_x64)
        } else {
            sqrt_at_tick.min(sqrt_price_limit_x64)
        };

        let liquidity = i128_to_u128_safe(state.liquidity);
        let step = compute_swap_step(
            env,
            state.sqrt_price_x64,
            sqrt_target,
            liquidity,
            remaining,
            fee_bps,
        );

        remaining -= step.amount_in + step.fee_amount;
        amount_out = amount_out.saturating_add(step.amount_out);
        fee_paid = fee_paid.saturating_add(step.fee_amount);

        if liquidity > 0 && step.fee_amount > 0 {
            let growth = mul_div(env, step.fee_amount, Q64, liquidity);
            if zero_for_one {
                state.fee_growth_global_0 = state.fee_growth_global_0.wrapping_add(growth);
            } else {
                state.fee_growth_global_1 = state.fee_growth_global_1.wrapping_add(growth);
            }
        }

        if step.sqrt_price_next == sqrt_at_tick {
            if next.is_some() {
                let liquidity_net = cross_tick(
                    store,
                    tick_next,
                    state.fee_growth_global_0,
                    state.fee_growth_global_1,
                );
                state.liquidity = if zero_for_one {
                    state.liquidity.saturating_sub(liquidity_net)
                } else {
                    state.liquidity.saturating_add(liquidity_net)
                };
            }
            state.tick = if zero_for_one { tick_next - 1 } else { tick_next };
        } else if step.sqrt_price_next != state.sqrt_price_x64 {
            state.tick = get_tick_at_sqrt_ratio(env, step.sqrt_price_next);
        }

        state.sqrt_price_x64 = step.sqrt_price_next;
    }

    let consumed = i128_to_u128_safe(amount_in) - remaining;
    Ok(SwapOutcome {
        amount_in: u128_to_i128_saturating(consumed),
        amount_out: u128_to_i128_saturating(amount_out),
        fee_paid: u128_to_i128_saturating(fee_paid),
        sqrt_price_x64: state.sqrt_price_x64,
        tick: state.tick,
    })
}
