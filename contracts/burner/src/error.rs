use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BurnerError {
    // State (3000-3099)
    AlreadyInitialized = 3000,
    NotInitialized = 3001,
    Paused = 3002,
    Reentrant = 3003,

    // Input (3100-3199)
    InvalidAmount = 3100,
    InvalidThreshold = 3101,
    /// Ledger accounting failed after a successful swap
    SettlementFailed = 3102,
}

pub struct BurnerErrorMsg;

impl BurnerErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Burner: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Burner: not initialized";
    pub const PAUSED: &'static str = "Burner: paused";
    pub const REENTRANT: &'static str = "Burner: reentrant call";
    pub const INVALID_AMOUNT: &'static str = "Burner: amount must be positive";
    pub const INVALID_THRESHOLD: &'static str = "Burner: threshold must not be negative";
    pub const SETTLEMENT_FAILED: &'static str = "Burner: settlement failed";
}
