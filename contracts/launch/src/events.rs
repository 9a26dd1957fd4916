//! Launch events

use soroban_sdk::{Address, BytesN, Env, Symbol};
use belugalaunch_fees::{FeeDistribution, FeeLeg, FeeSplit};

use crate::types::HarvestResult;

/// Pool seeded with the single position
pub fn emit_bootstrapped(
    env: &Env,
    pool_id: &BytesN<32>,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: i128,
    token_deposited: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Bootstrapped"), pool_id.clone()),
        (tick_lower, tick_upper, liquidity, token_deposited),
    );
}

pub fn emit_launched(env: &Env, token: &Address, creator: &Address, creator_reward: i128, index: u32) {
    env.events().publish(
        (Symbol::new(env, "Launched"), token.clone()),
        (creator.clone(), creator_reward, index),
    );
}

/// `side` is "buy" or "sell"; `fees` is what each leg actually received
#[allow(clippy::too_many_arguments)]
pub fn emit_trade(
    env: &Env,
    side: &str,
    trader: &Address,
    recipient: &Address,
    gross: i128,
    fee: i128,
    net: i128,
    amount_out: i128,
    price_before: u128,
    price_after: u128,
    fees: &FeeDistribution,
) {
    env.events().publish(
        (Symbol::new(env, "Trade"), Symbol::new(env, side)),
        (
            trader.clone(),
            recipient.clone(),
            gross,
            fee,
            net,
            amount_out,
            price_before,
            price_after,
            *fees,
        ),
    );
}

pub fn emit_fee_distributed(env: &Env, requested: &FeeSplit, paid: &FeeDistribution) {
    env.events().publish((Symbol::new(env, "FeeDist"),), (*requested, *paid));
}

pub fn emit_fee_leg_failed(env: &Env, leg: FeeLeg, recipient: Option<Address>, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "FeeLegFail"), leg.symbol(env)),
        (recipient, amount),
    );
}

pub fn emit_reward_deferred(env: &Env, reason: &str, amount: i128, pending: i128) {
    env.events().publish(
        (Symbol::new(env, "RewardDeferred"), Symbol::new(env, reason)),
        (amount, pending),
    );
}

pub fn emit_harvest(env: &Env, result: &HarvestResult) {
    env.events().publish((Symbol::new(env, "Harvest"),), *result);
}
