use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env};
use belugalaunch_fees::FeeSplits;

// ============================================================
// POOL IDENTITY
// ============================================================

/// Identity of a pool inside the ledger. Currencies are always sorted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    pub currency0: Address,
    pub currency1: Address,
    pub fee_bps: u32,
    pub tick_spacing: i32,
    pub hooks: Address,
}

impl PoolKey {
    /// Build a key from an unordered currency pair
    pub fn new(
        currency_a: Address,
        currency_b: Address,
        fee_bps: u32,
        tick_spacing: i32,
        hooks: Address,
    ) -> Self {
        let (currency0, currency1) = if currency_a < currency_b {
            (currency_a, currency_b)
        } else {
            (currency_b, currency_a)
        };
        Self { currency0, currency1, fee_bps, tick_spacing, hooks }
    }

    pub fn is_valid(&self) -> bool {
        self.currency0 < self.currency1
            && self.tick_spacing > 0
            && self.tick_spacing <= 16_384
            && self.fee_bps < 10_000
    }

    pub fn pool_id(&self, env: &Env) -> BytesN<32> {
        env.crypto().sha256(&self.clone().to_xdr(env)).into()
    }

    /// Currency paid in for a swap in the given direction
    pub fn input_currency(&self, zero_for_one: bool) -> Address {
        if zero_for_one { self.currency0.clone() } else { self.currency1.clone() }
    }

    pub fn output_currency(&self, zero_for_one: bool) -> Address {
        if zero_for_one { self.currency1.clone() } else { self.currency0.clone() }
    }

    pub fn contains(&self, currency: &Address) -> bool {
        &self.currency0 == currency || &self.currency1 == currency
    }
}

// ============================================================
// LEDGER COMMANDS AND RESULTS
// ============================================================

/// Per-currency amounts from the caller's side: negative is owed to
/// the ledger, positive is owed by it.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BalanceDelta {
    pub amount0: i128,
    pub amount1: i128,
}

impl BalanceDelta {
    pub fn new(amount0: i128, amount1: i128) -> Self {
        Self { amount0, amount1 }
    }

    /// (input side, output side) for a swap in the given direction
    pub fn by_direction(&self, zero_for_one: bool) -> (i128, i128) {
        if zero_for_one {
            (self.amount0, self.amount1)
        } else {
            (self.amount1, self.amount0)
        }
    }
}

/// Exact-input swap request. A zero limit selects the directional extreme.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapParams {
    pub zero_for_one: bool,
    pub amount_in: i128,
    pub sqrt_price_limit_x64: u128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModifyLiquidityParams {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity_delta: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModifyLiquidityResult {
    /// Principal plus realized fees
    pub delta: BalanceDelta,
    /// Realized fees alone
    pub fees: BalanceDelta,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slot0 {
    pub sqrt_price_x64: u128,
    pub tick: i32,
    pub liquidity: i128,
    pub fee_growth_global_0: u128,
    pub fee_growth_global_1: u128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount_in: i128,
    pub amount_out: i128,
    pub sqrt_price_x64: u128,
    pub tick: i32,
}

/// Position liquidity plus what a poke would realize right now
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PositionView {
    pub liquidity: i128,
    pub amount0: i128,
    pub amount1: i128,
    pub fees_owed_0: i128,
    pub fees_owed_1: i128,
}

// ============================================================
// LAUNCH CONFIGURATION
// ============================================================

/// Live launch configuration served by the factory
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchConfig {
    pub ledger: Address,
    pub native: Address,
    pub protocol_recipient: Address,
    pub burner: Address,
    pub fee_splits: FeeSplits,
    /// LP fee of the launch pool; must be an enabled fee tier
    pub pool_fee_bps: u32,
    pub tick_spacing: i32,
    /// Position range, token per native
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub max_slippage_bps: u32,
    /// Smallest accepted buy, in native units
    pub min_order_size: i128,
    pub max_total_fee_bps: u32,
    pub creator_reward_bps: u32,
    pub total_supply: i128,
}
