use soroban_sdk::contracttype;

/// Per-tick record. Absent ticks read as the default.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInfo {
    pub liquidity_gross: i128,
    /// Added to active liquidity when the price crosses upward
    pub liquidity_net: i128,
    pub fee_growth_outside_0: u128,
    pub fee_growth_outside_1: u128,
    pub initialized: bool,
}
