// Liquidity Calculations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;
use crate::q64::{i128_to_u128_safe, mul_div, mul_div_round_up, u128_to_i128_saturating};

#[inline]
fn sorted(a: u128, b: u128) -> (u128, u128) {
    if a < b { (a, b) } else { (b, a) }
}

/// Token0 amount spanned by `liquidity` between two sqrt prices.
///
/// amount0 = L * (upper - lower) * 2^64 / upper / lower
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 || liquidity == 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    let zero = U256::from_u32(env, 0);
    let one = U256::from_u32(env, 1);
    let numerator = U256::from_u128(env, liquidity)
        .shl(64)
        .mul(&U256::from_u128(env, sqrt_upper - sqrt_lower));
    let upper = U256::from_u128(env, sqrt_upper);
    let lower = U256::from_u128(env, sqrt_lower);

    let result = if round_up {
        let mut first = numerator.div(&upper);
        if numerator.rem_euclid(&upper) != zero {
            first = first.add(&one);
        }
        let mut second = first.div(&lower);
        if first.rem_euclid(&lower) != zero {
            second = second.add(&one);
        }
        second
    } else {
        numerator.div(&upper).div(&lower)
    };

    result.to_u128().unwrap_or(u128::MAX)
}

/// Token1 amount spanned by `liquidity` between two sqrt prices.
///
/// amount1 = L * (upper - lower) / 2^64
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if liquidity == 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    if round_up {
        mul_div_round_up(env, liquidity, sqrt_upper - sqrt_lower, Q64)
    } else {
        mul_div(env, liquidity, sqrt_upper - sqrt_lower, Q64)
    }
}

/// Liquidity supported by `amount0` over [lower, upper]
///
/// L = amount0 * (lower * upper / 2^64) / (upper - lower)
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: i128,
) -> i128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if amount0 <= 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    let intermediate = mul_div(env, sqrt_lower, sqrt_upper, Q64);
    let liquidity = mul_div(env, i128_to_u128_safe(amount0), intermediate, sqrt_upper - sqrt_lower);
    u128_to_i128_saturating(liquidity)
}

/// Liquidity supported by `amount1` over [lower, upper]
///
/// L = amount1 * 2^64 / (upper - lower)
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount1: i128,
) -> i128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if amount1 <= 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    let liquidity = mul_div(env, i128_to_u128_safe(amount1), Q64, sqrt_upper - sqrt_lower);
    u128_to_i128_saturating(liquidity)
}

/// Largest liquidity that consumes no more than the given amounts.
///
/// - price at or below the range: token0 alone
/// - price at or above the range: token1 alone
/// - inside: the binding side, unless one side truncates to zero, in
///   which case the other side is used
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_price_x64: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: i128,
    amount1: i128,
) -> i128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper {
        return 0;
    }

    if sqrt_price_x64 <= sqrt_lower {
        get_liquidity_for_amount0(env, sqrt_lower, sqrt_upper, amount0)
    } else if sqrt_price_x64 >= sqrt_upper {
        get_liquidity_for_amount1(env, sqrt_lower, sqrt_upper, amount1)
    } else {
        let liq0 = get_liquidity_for_amount0(env, sqrt_price_x64, sqrt_upper, amount0);
        let liq1 = get_liquidity_for_amount1(env, sqrt_lower, sqrt_price_x64, amount1);
        match (liq0, liq1) {
            (0, other) | (other, 0) => other,
            (a, b) => a.min(b),
        }
    }
}

/// Token amounts represented by `liquidity` at the given price, rounded down
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_price_x64: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: i128,
) -> (i128, i128) {
    if liquidity <= 0 { return (0, 0); }

    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    let liq_u = i128_to_u128_safe(liquidity);
    let sp = sqrt_price_x64.clamp(sqrt_lower, sqrt_upper);

    let amount0 = get_amount_0_delta(env, sp, sqrt_upper, liq_u, false);
    let amount1 = get_amount_1_delta(env, sqrt_lower, sp, liq_u, false);

    (u128_to_i128_saturating(amount0), u128_to_i128_saturating(amount1))
}
