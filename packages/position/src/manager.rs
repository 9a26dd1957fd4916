// Position Management Logic

use soroban_sdk::Env;
use belugalaunch_math::{is_usable_tick, mul_div, Q64};
use crate::types::Position;

/// Fees accrued since the position's last checkpoint
///
/// owed = liquidity * (inside - last) / 2^64, with wrapping growth deltas
pub fn pending_fees(
    env: &Env,
    pos: &Position,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> (u128, u128) {
    if pos.liquidity <= 0 {
        return (0, 0);
    }

    let liquidity_u = pos.liquidity as u128;
    let delta_0 = fee_growth_inside_0.wrapping_sub(pos.fee_growth_inside_last_0);
    let delta_1 = fee_growth_inside_1.wrapping_sub(pos.fee_growth_inside_last_1);

    (
        mul_div(env, liquidity_u, delta_0, Q64),
        mul_div(env, liquidity_u, delta_1, Q64),
    )
}

/// Realize fees, move the checkpoints, then apply the liquidity change.
///
/// Returns the realized fees. A zero `liquidity_delta` is a poke.
pub fn update_position(
    env: &Env,
    pos: &mut Position,
    liquidity_delta: i128,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> (u128, u128) {
    let fees = pending_fees(env, pos, fee_growth_inside_0, fee_growth_inside_1);

    pos.fee_growth_inside_last_0 = fee_growth_inside_0;
    pos.fee_growth_inside_last_1 = fee_growth_inside_1;
    pos.liquidity = pos.liquidity.saturating_add(liquidity_delta);

    fees
}

/// Validate position parameters
pub fn validate_position_params(
    lower: i32,
    upper: i32,
    tick_spacing: i32,
) -> Result<(), &'static str> {
    if tick_spacing <= 0 {
        return Err("tick spacing must be positive");
    }

    if lower >= upper {
        return Err("lower tick must be less than upper tick");
    }

    if !is_usable_tick(lower, tick_spacing) || !is_usable_tick(upper, tick_spacing) {
        return Err("ticks must be aligned to tick spacing and in range");
    }

    Ok(())
}
