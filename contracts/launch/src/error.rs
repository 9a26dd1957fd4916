use soroban_sdk::contracterror;
use belugalaunch_common::LedgerError;
use belugalaunch_fees::FeeError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LaunchError {
    // ============================================================
    // LIFECYCLE (2000-2099)
    // ============================================================
    AlreadyInitialized = 2000,
    NotInitialized = 2001,
    /// Bootstrap has not finished
    NotTrading = 2002,
    Reentrant = 2003,

    // ============================================================
    // INPUT (2100-2199)
    // ============================================================
    /// Total fee above the configured cap
    InvalidFeeConfig = 2100,
    InvalidShare = 2101,
    /// Launched token must differ from the native currency
    InvalidToken = 2102,
    InvalidRecipient = 2103,
    OrderTooSmall = 2104,
    InvalidAmount = 2105,
    InvalidSlippage = 2106,
    InvalidPriceLimit = 2107,

    // ============================================================
    // SETTLEMENT (2200-2299)
    // ============================================================
    /// Ledger deltas have the wrong sign or size
    InvalidDelta = 2200,
    /// Buy was not filled completely
    PartialFill = 2201,
    SlippageExceeded = 2202,
    SimulationInvariantViolated = 2203,
    BootstrapFailed = 2204,
    /// Ledger credits or debts did not balance
    SettlementFailed = 2205,

    // ============================================================
    // FEES (2300-2399)
    // ============================================================
    InvalidFeeSplits = 2300,
    ProtocolTransferFailed = 2301,

    // ============================================================
    // COLLABORATORS (2400-2499)
    // ============================================================
    FactoryUnavailable = 2400,
    /// Another ledger session is open
    LedgerBusy = 2401,
    LedgerCallFailed = 2402,
}

impl From<FeeError> for LaunchError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InvalidSplits => LaunchError::InvalidFeeSplits,
            FeeError::InvalidShare => LaunchError::InvalidShare,
            FeeError::ProtocolTransferFailed => LaunchError::ProtocolTransferFailed,
        }
    }
}

impl From<LedgerError> for LaunchError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AlreadyUnlocked => LaunchError::LedgerBusy,
            LedgerError::SimulationInvariantViolated => LaunchError::SimulationInvariantViolated,
            LedgerError::PriceLimitOutOfBounds => LaunchError::InvalidPriceLimit,
            LedgerError::CurrencyNotSettled
            | LedgerError::OutstandingDebt
            | LedgerError::InsufficientReserves => LaunchError::SettlementFailed,
            _ => LaunchError::LedgerCallFailed,
        }
    }
}

pub struct LaunchErrorMsg;

impl LaunchErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Launch: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Launch: not initialized";
    pub const NOT_TRADING: &'static str = "Launch: pool not bootstrapped";
    pub const REENTRANT: &'static str = "Launch: reentrant call";
    pub const INVALID_FEE_CONFIG: &'static str = "Launch: total fee above cap";
    pub const INVALID_SHARE: &'static str = "Launch: beneficiary share above 10000";
    pub const INVALID_TOKEN: &'static str = "Launch: token equals native currency";
    pub const INVALID_RECIPIENT: &'static str = "Launch: recipient unset";
    pub const ORDER_TOO_SMALL: &'static str = "Launch: order below minimum";
    pub const INVALID_AMOUNT: &'static str = "Launch: amount must be positive";
    pub const INVALID_SLIPPAGE: &'static str = "Launch: slippage above cap";
    pub const INVALID_PRICE_LIMIT: &'static str = "Launch: price limit out of bounds";
    pub const INVALID_DELTA: &'static str = "Launch: unexpected ledger delta";
    pub const PARTIAL_FILL: &'static str = "Launch: partial fill";
    pub const SLIPPAGE_EXCEEDED: &'static str = "Launch: output below minimum";
    pub const SIMULATION_INVARIANT: &'static str = "Launch: simulation did not revert";
    pub const BOOTSTRAP_FAILED: &'static str = "Launch: zero bootstrap liquidity";
    pub const SETTLEMENT_FAILED: &'static str = "Launch: ledger settlement unbalanced";
    pub const INVALID_FEE_SPLITS: &'static str = "Launch: fee splits must sum to 10000";
    pub const PROTOCOL_TRANSFER_FAILED: &'static str = "Launch: protocol fee transfer failed";
    pub const FACTORY_UNAVAILABLE: &'static str = "Launch: factory config unavailable";
    pub const LEDGER_BUSY: &'static str = "Launch: ledger session open";
    pub const LEDGER_CALL_FAILED: &'static str = "Launch: ledger call failed";
}
