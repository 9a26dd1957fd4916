use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeeError {
    // Configuration (4000-4099)
    InvalidSplits = 4000,
    InvalidShare = 4001,

    // Distribution (4100-4199)
    ProtocolTransferFailed = 4100,
}

pub struct FeeErrorMsg;

impl FeeErrorMsg {
    pub const INVALID_SPLITS: &'static str = "Fees: burn + protocol + referrer must equal 10000 bps";
    pub const INVALID_SHARE: &'static str = "Fees: share exceeds 10000 bps";
    pub const PROTOCOL_TRANSFER_FAILED: &'static str = "Fees: protocol transfer failed";
}
