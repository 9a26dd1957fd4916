// Ledger error codes live here so that every contract talking to the
// ledger can decode them.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Session errors (100-199)
    /// A session is already open
    AlreadyUnlocked = 100,
    /// Command issued without an open session
    NotUnlocked = 101,
    /// Token does not belong to the open session
    InvalidSessionToken = 102,
    /// Session closed with a non-zero currency delta
    CurrencyNotSettled = 103,
    /// Take would leave a currency in debt
    OutstandingDebt = 104,
    /// Simulated operation completed instead of reverting with a quote
    SimulationInvariantViolated = 105,

    // Pool errors (200-299)
    PoolAlreadyInitialized = 200,
    PoolNotInitialized = 201,
    InvalidPoolKey = 202,
    InvalidSqrtPrice = 203,

    // Liquidity errors (300-399)
    InvalidTickRange = 300,
    InvalidLiquidityDelta = 301,
    InsufficientPositionLiquidity = 302,

    // Swap errors (400-499)
    InvalidAmount = 400,
    PriceLimitOutOfBounds = 401,

    // Accounting errors (500-599)
    InsufficientReserves = 500,
    ArithmeticOverflow = 501,
}

pub struct LedgerErrorMsg;

impl LedgerErrorMsg {
    pub const ALREADY_UNLOCKED: &'static str = "Ledger: session already open";
    pub const NOT_UNLOCKED: &'static str = "Ledger: no open session";
    pub const INVALID_SESSION_TOKEN: &'static str = "Ledger: invalid session token";
    pub const CURRENCY_NOT_SETTLED: &'static str = "Ledger: currency not settled";
    pub const OUTSTANDING_DEBT: &'static str = "Ledger: outstanding debt";
    pub const SIMULATION_INVARIANT: &'static str = "Ledger: simulation did not revert";
    pub const POOL_ALREADY_INITIALIZED: &'static str = "Ledger: pool already initialized";
    pub const POOL_NOT_INITIALIZED: &'static str = "Ledger: pool not initialized";
    pub const INVALID_POOL_KEY: &'static str = "Ledger: invalid pool key";
    pub const INVALID_SQRT_PRICE: &'static str = "Ledger: sqrt price out of range";
    pub const INVALID_TICK_RANGE: &'static str = "Ledger: invalid tick range";
    pub const INVALID_LIQUIDITY_DELTA: &'static str = "Ledger: invalid liquidity delta";
    pub const INSUFFICIENT_POSITION_LIQUIDITY: &'static str = "Ledger: insufficient position liquidity";
    pub const INVALID_AMOUNT: &'static str = "Ledger: amount must be positive";
    pub const PRICE_LIMIT_OUT_OF_BOUNDS: &'static str = "Ledger: price limit out of bounds";
    pub const INSUFFICIENT_RESERVES: &'static str = "Ledger: insufficient reserves";
    pub const ARITHMETIC_OVERFLOW: &'static str = "Ledger: arithmetic overflow";
}
