use soroban_sdk::{contracttype, Address};
use belugalaunch_common::PoolKey;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnerConfig {
    pub ledger: Address,
    pub native: Address,
    pub burn_token: Address,
    /// Pool used to buy the burn token with native
    pub pool_key: PoolKey,
    /// Deposits auto-flush once pending reaches this; zero disables it
    pub flush_threshold: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BurnPhase {
    Idle,
    Accumulating,
    Flushing,
}

/// Why a flush did not burn anything
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlushFailure {
    PoolMismatch,
    QuoteFailed,
    ZeroOutput,
    SwapFailed,
}

impl FlushFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            FlushFailure::PoolMismatch => "pool_mismatch",
            FlushFailure::QuoteFailed => "quote_fail",
            FlushFailure::ZeroOutput => "zero_out",
            FlushFailure::SwapFailed => "swap_fail",
        }
    }
}
