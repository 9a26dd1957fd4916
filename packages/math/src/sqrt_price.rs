// Tick <-> sqrt price conversion and price movement

use soroban_sdk::{Env, U256};
use crate::constants::{MAX_SQRT_PRICE, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK, LOW_64_MASK, Q64};
use crate::q64::{mul_div, mul_div_round_up, mul_shr_128};

/// floor(2^128 / sqrt(1.0001)^(2^i)), i = 0..=18
const TICK_RATIOS_Q128: [u128; 19] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x09aa508b5b7a84e1c677de54f3e99bc9,
    0x005d6af8dedb81196699c329225ee604,
    0x00002216e584f5fa1ea926041bedfe98,
];

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64, rounded up
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    let abs_tick = tick.unsigned_abs();

    // 1 / sqrt(1.0001^|tick|) in Q128
    let mut ratio: u128 = if abs_tick & 0x1 != 0 {
        TICK_RATIOS_Q128[0]
    } else {
        u128::MAX
    };
    for (bit, factor) in TICK_RATIOS_Q128.iter().enumerate().skip(1) {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = mul_shr_128(ratio, *factor);
        }
    }

    if tick > 0 {
        // invert: 2^192 / ratio, rounded up
        let numerator = U256::from_u32(env, 1).shl(192);
        let den = U256::from_u128(env, ratio);
        let quotient = numerator.div(&den);
        let quotient = if numerator.rem_euclid(&den) != U256::from_u32(env, 0) {
            quotient.add(&U256::from_u32(env, 1))
        } else {
            quotient
        };
        quotient.to_u128().unwrap_or(u128::MAX)
    } else {
        let shifted = ratio >> 64;
        if ratio & LOW_64_MASK != 0 { shifted + 1 } else { shifted }
    }
}

/// Greatest tick whose sqrt price does not exceed `sqrt_price_x64`
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x64: u128) -> i32 {
    if !(MIN_SQRT_PRICE..MAX_SQRT_PRICE).contains(&sqrt_price_x64) {
        panic!("sqrt price out of range");
    }

    let mut lo = MIN_TICK;
    let mut hi = MAX_TICK;
    while lo < hi {
        // upper midpoint so `lo = mid` always makes progress
        let mid = lo + (hi - lo + 1) / 2;
        if get_sqrt_ratio_at_tick(env, mid) <= sqrt_price_x64 {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Next sqrt price after adding `amount` of token0, rounded up so the
/// price never moves further than the input pays for.
///
/// P' = L * P / (L + amount * P / 2^64)
fn next_sqrt_price_from_amount0_rounding_up(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
) -> u128 {
    if amount == 0 {
        return sqrt_price;
    }

    let numerator1 = U256::from_u128(env, liquidity).shl(64);
    let product = U256::from_u128(env, amount).mul(&U256::from_u128(env, sqrt_price));
    let denominator = numerator1.add(&product);

    let full = numerator1.mul(&U256::from_u128(env, sqrt_price));
    let quotient = full.div(&denominator);
    let quotient = if full.rem_euclid(&denominator) != U256::from_u32(env, 0) {
        quotient.add(&U256::from_u32(env, 1))
    } else {
        quotient
    };

    quotient.to_u128().unwrap_or(u128::MAX)
}

/// Next sqrt price after adding `amount` of token1, rounded down.
///
/// P' = P + amount * 2^64 / L
fn next_sqrt_price_from_amount1_rounding_down(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
) -> u128 {
    let quotient = mul_div(env, amount, Q64, liquidity);
    sqrt_price.saturating_add(quotient)
}

/// Calculate next sqrt price given an input amount
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> u128 {
    if amount_in == 0 || liquidity == 0 {
        return sqrt_price;
    }

    if zero_for_one {
        next_sqrt_price_from_amount0_rounding_up(env, sqrt_price, liquidity, amount_in)
    } else {
        next_sqrt_price_from_amount1_rounding_down(env, sqrt_price, liquidity, amount_in)
    }
}

/// Scale a sqrt price by (10000 + delta_bps) / 10000, clamped into the
/// open interval the ledger accepts as a price limit.
pub fn scale_sqrt_price_bps(env: &Env, sqrt_price: u128, bps: u32, up: bool) -> u128 {
    let factor = if up { 10_000u128 + bps as u128 } else { 10_000u128.saturating_sub(bps as u128) };
    let scaled = if up {
        mul_div_round_up(env, sqrt_price, factor, 10_000)
    } else {
        mul_div(env, sqrt_price, factor, 10_000)
    };
    scaled.clamp(MIN_SQRT_PRICE + 1, MAX_SQRT_PRICE - 1)
}
