// Factory error module for BelugaLaunch

use soroban_sdk::contracterror;

use belugalaunch_fees::FeeError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Configuration errors (1100-1199)
    InvalidFeeSplits = 1100,
    InvalidTickRange = 1101,
    InvalidTickSpacing = 1102,
    InvalidFeeTier = 1103,
    InvalidBps = 1104,
    InvalidAmount = 1105,

    // Registry errors (1200-1299)
    LaunchAlreadyRegistered = 1200,

    // Authorization errors (1300-1399)
    Unauthorized = 1300,
}

impl From<FeeError> for FactoryError {
    fn from(_: FeeError) -> Self {
        FactoryError::InvalidFeeSplits
    }
}

/// Human-readable error messages for debugging
pub struct FactoryErrorMsg;

impl FactoryErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Factory: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Factory: not initialized";

    pub const INVALID_FEE_SPLITS: &'static str = "Factory: burn + protocol + referrer must equal 10000 bps";
    pub const INVALID_TICK_RANGE: &'static str = "Factory: lower tick must be below upper tick and both in bounds";
    pub const INVALID_TICK_SPACING: &'static str = "Factory: ticks must align with tick spacing";
    pub const INVALID_FEE_TIER: &'static str = "Factory: fee tier not enabled or invalid";
    pub const INVALID_BPS: &'static str = "Factory: basis points out of range";
    pub const INVALID_AMOUNT: &'static str = "Factory: amount out of range";

    pub const LAUNCH_ALREADY_REGISTERED: &'static str = "Factory: token already has a launch";

    pub const UNAUTHORIZED: &'static str = "Factory: caller not authorized";
}
