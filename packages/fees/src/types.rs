use soroban_sdk::{contracttype, Symbol, Env};

/// Tier-3 split of the remainder, in basis points. Must sum to 10000.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeSplits {
    pub burn_bps: u32,
    pub protocol_bps: u32,
    pub referrer_bps: u32,
}

/// Requested partition of one fee. `protocol` already includes `dust`.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
    pub beneficiary: i128,
    pub burn: i128,
    pub referrer: i128,
    pub protocol: i128,
    pub dust: i128,
}

/// What each leg actually received after fallbacks
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeDistribution {
    pub beneficiary: i128,
    pub burn: i128,
    pub referrer: i128,
    pub protocol: i128,
}

impl FeeDistribution {
    pub fn total(&self) -> i128 {
        self.beneficiary + self.burn + self.referrer + self.protocol
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeLeg {
    Burn,
    Beneficiary,
    Referrer,
    Protocol,
}

impl FeeLeg {
    /// Event topic naming the leg's role
    pub fn symbol(&self, env: &Env) -> Symbol {
        match self {
            FeeLeg::Burn => Symbol::new(env, "burn"),
            FeeLeg::Beneficiary => Symbol::new(env, "beneficiary"),
            FeeLeg::Referrer => Symbol::new(env, "referrer"),
            FeeLeg::Protocol => Symbol::new(env, "protocol"),
        }
    }
}
