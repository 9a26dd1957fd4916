use soroban_sdk::{contracttype, Address};
use belugalaunch_common::{BalanceDelta, PoolKey};
use belugalaunch_fees::FeeDistribution;

// ============================================================
// LIFECYCLE
// ============================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    PoolBootstrapped,
    Trading,
}

/// Creation arguments. Fee parameters are fixed for the launch's lifetime.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchParams {
    pub factory: Address,
    pub creator: Address,
    pub beneficiary: Address,
    /// Stellar asset whose admin is the launch contract
    pub token: Address,
    pub total_fee_bps: u32,
    pub beneficiary_share_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchState {
    pub factory: Address,
    pub creator: Address,
    pub beneficiary: Address,
    pub token: Address,
    pub native: Address,
    pub ledger: Address,
    pub pool_key: PoolKey,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: i128,
    pub total_fee_bps: u32,
    pub beneficiary_share_bps: u32,
}

impl LaunchState {
    /// Swap direction of a buy (native in)
    pub fn buy_zero_for_one(&self) -> bool {
        self.pool_key.currency0 == self.native
    }

    /// (native, token) sides of a ledger delta
    pub fn by_currency(&self, delta: &BalanceDelta) -> (i128, i128) {
        if self.pool_key.currency0 == self.native {
            (delta.amount0, delta.amount1)
        } else {
            (delta.amount1, delta.amount0)
        }
    }
}

// ============================================================
// SESSION REQUESTS
// ============================================================

/// Payload handed to `unlock`; it determines the session token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LaunchRequest {
    /// Liquidity of the single position
    Bootstrap(i128),
    Buy(TradeRequest),
    Sell(TradeRequest),
    /// Sell-direction price limit of the reward conversion
    Harvest(u128),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TradeRequest {
    pub trader: Address,
    pub recipient: Address,
    /// Amount handed to the ledger swap
    pub amount_in: i128,
    pub min_out: i128,
    pub sqrt_price_limit_x64: u128,
}

// ============================================================
// RESULTS
// ============================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TradeQuote {
    pub fee_bps: u32,
    /// Native fee; taken from the input on buys and the output on sells
    pub fee: i128,
    /// Input the ledger would consume
    pub net_in: i128,
    /// Output after fees
    pub amount_out: i128,
    pub sqrt_price_after: u128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HarvestResult {
    pub native_fees: i128,
    pub token_fees: i128,
    /// Tokens sold by the conversion, zero when deferred
    pub converted_in: i128,
    pub converted_out: i128,
    /// Native amount handed to the fee pipeline
    pub native_total: i128,
    pub pending: i128,
    pub distribution: FeeDistribution,
}
