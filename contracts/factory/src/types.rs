//! Factory type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// FEE TIER
// ============================================================

/// Fee tier configuration
/// - 5 bps (0.05%) + tick spacing 10 → Stablecoins
/// - 30 bps (0.30%) + tick spacing 60 → Volatile
/// - 100 bps (1.00%) + tick spacing 200 → Meme/Exotic
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeTier {
    pub fee_bps: u32,
    pub tick_spacing: i32,
    pub enabled: bool,
}

// ============================================================
// LAUNCH REGISTRY
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchInfo {
    pub launch: Address,
    pub token: Address,
    pub creator: Address,
    pub index: u32,
    /// Ledger sequence at registration
    pub created_at: u32,
}
