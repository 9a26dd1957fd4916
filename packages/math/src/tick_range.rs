// Tick rounding to a spacing multiple

use crate::constants::{MAX_TICK, MIN_TICK};

/// Lowest tick that is a multiple of `spacing` and not below MIN_TICK
#[inline]
pub fn min_usable_tick(spacing: i32) -> i32 {
    -(MAX_TICK / spacing) * spacing
}

/// Highest tick that is a multiple of `spacing` and not above MAX_TICK
#[inline]
pub fn max_usable_tick(spacing: i32) -> i32 {
    (MAX_TICK / spacing) * spacing
}

/// Round toward negative infinity onto the spacing grid
pub fn round_tick_down(tick: i32, spacing: i32) -> i32 {
    if spacing <= 0 {
        panic!("tick_spacing must be positive");
    }
    let snapped = tick - tick.rem_euclid(spacing);
    snapped.clamp(min_usable_tick(spacing), max_usable_tick(spacing))
}

/// Round toward positive infinity onto the spacing grid
pub fn round_tick_up(tick: i32, spacing: i32) -> i32 {
    if spacing <= 0 {
        panic!("tick_spacing must be positive");
    }
    let rem = tick.rem_euclid(spacing);
    let snapped = if rem == 0 { tick } else { tick.saturating_add(spacing - rem) };
    snapped.clamp(min_usable_tick(spacing), max_usable_tick(spacing))
}

/// Round a requested range outward so the result always contains it
/// (up to the usable bounds).
pub fn round_range_outward(lower: i32, upper: i32, spacing: i32) -> (i32, i32) {
    (round_tick_down(lower, spacing), round_tick_up(upper, spacing))
}

/// True when `tick` sits on the grid and inside the usable bounds
#[inline]
pub fn is_usable_tick(tick: i32, spacing: i32) -> bool {
    spacing > 0 && tick % spacing == 0 && (MIN_TICK..=MAX_TICK).contains(&tick)
}
