#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env};
use belugalaunch_common::LaunchConfig;
use belugalaunch_factory::{BelugaFactory, BelugaFactoryClient};
use belugalaunch_fees::FeeSplits;

pub const SPLITS: FeeSplits = FeeSplits {
    burn_bps: 5000,
    protocol_bps: 3000,
    referrer_bps: 2000,
};

pub fn default_config(env: &Env) -> LaunchConfig {
    LaunchConfig {
        ledger: Address::generate(env),
        native: Address::generate(env),
        protocol_recipient: Address::generate(env),
        burner: Address::generate(env),
        fee_splits: SPLITS,
        pool_fee_bps: 30,
        // taken from the fee tier on initialize
        tick_spacing: 0,
        tick_lower: 0,
        tick_upper: 69_060,
        max_slippage_bps: 500,
        min_order_size: 1_000,
        max_total_fee_bps: 1_000,
        creator_reward_bps: 500,
        total_supply: 1_000_000_000_000_000,
    }
}

pub fn setup_factory(env: &Env) -> (BelugaFactoryClient<'_>, Address) {
    let admin = Address::generate(env);
    let factory_id = env.register(BelugaFactory, ());
    let client = BelugaFactoryClient::new(env, &factory_id);
    client.initialize(&admin, &default_config(env));
    (client, admin)
}
