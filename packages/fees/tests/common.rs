#![allow(dead_code)]

use belugalaunch_fees::{FeeLeg, FeeSink, FeeSplits, LegRecipients};
use soroban_sdk::{testutils::Address as _, Address, Env};

pub const SPLITS: FeeSplits = FeeSplits {
    burn_bps: 5000,
    protocol_bps: 3000,
    referrer_bps: 2000,
};

/// Records every leg; failures are scripted per recipient.
pub struct ScriptedSink {
    pub burn_ok: bool,
    pub failing: std::vec::Vec<Address>,
    pub burned: i128,
    pub paid: std::vec::Vec<(Address, i128)>,
    pub failed: std::vec::Vec<(FeeLeg, i128)>,
}

impl ScriptedSink {
    pub fn new() -> Self {
        Self {
            burn_ok: true,
            failing: std::vec::Vec::new(),
            burned: 0,
            paid: std::vec::Vec::new(),
            failed: std::vec::Vec::new(),
        }
    }

    pub fn paid_to(&self, who: &Address) -> i128 {
        self.paid.iter().filter(|(a, _)| a == who).map(|(_, v)| *v).sum()
    }

    pub fn total_out(&self) -> i128 {
        self.burned + self.paid.iter().map(|(_, v)| *v).sum::<i128>()
    }
}

impl FeeSink for ScriptedSink {
    fn deposit_burn(&mut self, amount: i128) -> bool {
        if self.burn_ok {
            self.burned += amount;
        }
        self.burn_ok
    }

    fn transfer(&mut self, to: &Address, amount: i128) -> bool {
        if self.failing.contains(to) {
            return false;
        }
        self.paid.push((to.clone(), amount));
        true
    }

    fn leg_failed(&mut self, leg: FeeLeg, _recipient: Option<&Address>, amount: i128) {
        self.failed.push((leg, amount));
    }
}

pub fn recipients(env: &Env, with_referrer: bool) -> LegRecipients {
    LegRecipients {
        beneficiary: Address::generate(env),
        referrer: if with_referrer { Some(Address::generate(env)) } else { None },
        protocol: Address::generate(env),
    }
}
