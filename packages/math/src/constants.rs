// Constants shared by the launch pool math.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Lowest usable tick. Chosen so every sqrt price fits Q64.64 with
/// 32 bits of headroom on both ends.
pub const MIN_TICK: i32 = -443636;

/// Highest usable tick.
pub const MAX_TICK: i32 = 443636;

/// Widest spacing a pool key may declare.
pub const MAX_TICK_SPACING: i32 = 16384;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// sqrt(1.0001^MIN_TICK) * 2^64, as produced by `get_sqrt_ratio_at_tick`
pub const MIN_SQRT_PRICE: u128 = 4295048017;

/// sqrt(1.0001^MAX_TICK) * 2^64, as produced by `get_sqrt_ratio_at_tick`
pub const MAX_SQRT_PRICE: u128 = 79226673515401279992447579062;

/// Price 1.0
pub const SQRT_PRICE_1_1: u128 = 1u128 << 64;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Upper bound on loop iterations in a single swap
pub const MAX_SWAP_ITERATIONS: u32 = 1024;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Basis point denominator (100%)
pub const BPS_DENOMINATOR: u32 = 10_000;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// 2^64, the Q64.64 scaling factor
pub const Q64: u128 = 1u128 << 64;

pub(crate) const LOW_64_MASK: u128 = 0xFFFF_FFFF_FFFF_FFFF;
