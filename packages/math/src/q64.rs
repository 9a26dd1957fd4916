// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::constants::{LOW_64_MASK, Q64};

pub const ONE_X64: u128 = Q64;

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 { i128::MAX } else { x as i128 }
}

/// floor(a * b / 2^128) for two 128-bit operands, computed on 64-bit limbs.
/// Exact: the result always fits because both operands are below 2^128.
#[inline]
pub fn mul_shr_128(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & LOW_64_MASK;
    let b_hi = b >> 64;
    let b_lo = b & LOW_64_MASK;

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let mid = (ll >> 64) + (lh & LOW_64_MASK) + (hl & LOW_64_MASK);
    hh + (lh >> 64) + (hl >> 64) + (mid >> 64)
}

/// Full-precision (a * b) / denominator, rounded down.
///
/// The product is formed in 256 bits on the host, so it never overflows.
/// Saturates at `u128::MAX` when the quotient does not fit.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 { panic!("mul_div: divide by zero"); }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128().unwrap_or(u128::MAX)
}

/// Full-precision (a * b) / denominator, rounded up.
pub fn mul_div_round_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 { panic!("mul_div: divide by zero"); }

    let den = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let quotient = product.div(&den);
    let rounded = if product.rem_euclid(&den) != U256::from_u32(env, 0) {
        quotient.add(&U256::from_u32(env, 1))
    } else {
        quotient
    };

    rounded.to_u128().unwrap_or(u128::MAX)
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> u128 {
    if denominator == 0 { return 0; }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result.saturating_add(1)
    } else {
        result
    }
}

/// `amount * bps / 10000`, truncated toward zero
#[inline]
pub fn apply_bps(amount: i128, bps: u32) -> i128 {
    if amount <= 0 || bps == 0 {
        return 0;
    }
    // i128 keeps 127 bits; amounts near the edge fall back to the split form
    match amount.checked_mul(bps as i128) {
        Some(p) => p / 10_000,
        None => (amount / 10_000) * bps as i128 + (amount % 10_000) * bps as i128 / 10_000,
    }
}
