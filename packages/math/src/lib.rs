// BelugaLaunch Math Package

#![no_std]

pub mod constants;
pub mod q64;
pub mod sqrt_price;
pub mod liquidity;
pub mod tick_range;

pub use constants::*;

pub use q64::{
    apply_bps,
    div_round_up,
    i128_to_u128_safe,
    mul_div,
    mul_div_round_up,
    mul_shr_128,
    u128_to_i128_saturating,
    ONE_X64,
};

pub use sqrt_price::{
    get_next_sqrt_price_from_input,
    get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio,
    scale_sqrt_price_bps,
};

pub use liquidity::{
    get_amount_0_delta,
    get_amount_1_delta,
    get_amounts_for_liquidity,
    get_liquidity_for_amount0,
    get_liquidity_for_amount1,
    get_liquidity_for_amounts,
};

pub use tick_range::{
    is_usable_tick,
    max_usable_tick,
    min_usable_tick,
    round_range_outward,
    round_tick_down,
    round_tick_up,
};
