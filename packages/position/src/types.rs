use soroban_sdk::contracttype;

/// A liquidity position inside one pool, keyed by (owner, lower, upper).
/// Checkpoints are the fee growth inside the range at the last touch.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub liquidity: i128,
    pub fee_growth_inside_last_0: u128,
    pub fee_growth_inside_last_1: u128,
}
