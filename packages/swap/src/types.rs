// Swap engine types

/// Minimal pool state the engine moves
#[derive(Clone, Debug, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x64: u128,
    pub tick: i32,
    pub liquidity: i128,
    pub fee_growth_global_0: u128,
    pub fee_growth_global_1: u128,
}

/// Result of one step between the current price and a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapStep {
    pub sqrt_price_next: u128,
    pub amount_in: u128,
    pub amount_out: u128,
    pub fee_amount: u128,
}

/// Totals of an exact-input swap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapOutcome {
    /// Input consumed, LP fee included
    pub amount_in: i128,
    pub amount_out: i128,
    /// LP fee charged on the input
    pub fee_paid: i128,
    pub sqrt_price_x64: u128,
    pub tick: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapError {
    InvalidAmount,
    PriceLimitOutOfBounds,
}
