#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{StellarAssetClient, TokenClient},
    Address, Bytes, Env, Symbol, TryFromVal, Val, Vec,
};
use belugalaunch_burner::{BelugaBurner, BelugaBurnerClient};
use belugalaunch_common::{ModifyLiquidityParams, PoolKey};
use belugalaunch_ledger::{BelugaLedger, BelugaLedgerClient};
use belugalaunch_math::SQRT_PRICE_1_1;

pub const LIQUIDITY: i128 = 1_000_000_000;
pub const LP_FUNDS: i128 = 1_000_000_000_000;
pub const DEPOSITOR_FUNDS: i128 = 10_000_000_000;

/// State of the native/burn-token pool when the burner is created
#[derive(Clone, Copy, PartialEq)]
pub enum PoolState {
    Missing,
    Empty,
    Liquid,
}

pub struct Setup<'a> {
    pub env: Env,
    pub burner: BelugaBurnerClient<'a>,
    pub ledger: BelugaLedgerClient<'a>,
    pub admin: Address,
    pub native: Address,
    pub burn_token: Address,
    pub key: PoolKey,
    pub depositor: Address,
    pub lp: Address,
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

pub fn setup<'a>(pool: PoolState, flush_threshold: i128) -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let issuer = Address::generate(&env);
    let native = env.register_stellar_asset_contract_v2(issuer.clone()).address();
    let burn_token = env.register_stellar_asset_contract_v2(issuer).address();

    let ledger_id = env.register(BelugaLedger, ());
    let ledger = BelugaLedgerClient::new(&env, &ledger_id);
    let key = PoolKey::new(native.clone(), burn_token.clone(), 30, 60, Address::generate(&env));

    let lp = Address::generate(&env);
    let depositor = Address::generate(&env);
    StellarAssetClient::new(&env, &native).mint(&lp, &LP_FUNDS);
    StellarAssetClient::new(&env, &burn_token).mint(&lp, &LP_FUNDS);
    StellarAssetClient::new(&env, &native).mint(&depositor, &DEPOSITOR_FUNDS);

    if pool != PoolState::Missing {
        ledger.initialize_pool(&key, &SQRT_PRICE_1_1);
    }
    if pool == PoolState::Liquid {
        add_liquidity(&env, &ledger, &key, &lp, -600, 600, LIQUIDITY);
    }

    let admin = Address::generate(&env);
    let burner_id = env.register(BelugaBurner, ());
    let burner = BelugaBurnerClient::new(&env, &burner_id);
    burner.initialize(&admin, &ledger_id, &native, &burn_token, &key, &flush_threshold);

    Setup { env, burner, ledger, admin, native, burn_token, key, depositor, lp }
}

pub fn add_liquidity(
    env: &Env,
    ledger: &BelugaLedgerClient,
    key: &PoolKey,
    lp: &Address,
    lower: i32,
    upper: i32,
    liquidity: i128,
) {
    let session = ledger.unlock(lp, &Bytes::from_slice(env, b"lp"));
    let result = ledger.modify_liquidity(
        &session,
        key,
        &ModifyLiquidityParams { tick_lower: lower, tick_upper: upper, liquidity_delta: liquidity },
    );
    for (currency, amount) in [(&key.currency0, result.delta.amount0), (&key.currency1, result.delta.amount1)] {
        if amount < 0 {
            TokenClient::new(env, currency).transfer(lp, &ledger.address, &-amount);
            ledger.settle(&session, currency);
        }
    }
    ledger.lock(lp, &session);
}

/// Approve and deposit from the depositor
pub fn deposit(s: &Setup, amount: i128) -> i128 {
    let expiration = s.env.ledger().sequence() + 100;
    TokenClient::new(&s.env, &s.native).approve(&s.depositor, &s.burner.address, &amount, &expiration);
    s.burner.deposit(&s.depositor, &amount)
}

/// Whether the last invocation emitted `name` (and `tag` as second topic)
/// from `contract`
pub fn has_event(env: &Env, contract: &Address, name: &str, tag: Option<&str>) -> bool {
    find_event(env, contract, name, tag).is_some()
}

/// Data of the last matching event of the last invocation, decoded as `T`
pub fn event_data<T: TryFromVal<Env, Val>>(
    env: &Env,
    contract: &Address,
    name: &str,
    tag: Option<&str>,
) -> Option<T> {
    find_event(env, contract, name, tag).and_then(|data| T::try_from_val(env, &data).ok())
}

fn find_event(env: &Env, contract: &Address, name: &str, tag: Option<&str>) -> Option<Val> {
    let topic_is = |topics: &Vec<Val>, i: u32, expected: &str| {
        topics
            .get(i)
            .and_then(|v| Symbol::try_from_val(env, &v).ok())
            .map_or(false, |s| s == Symbol::new(env, expected))
    };
    env.events()
        .all()
        .iter()
        .filter(|(from, topics, _)| {
            from == contract
                && topic_is(topics, 0, name)
                && tag.map_or(true, |tag| topic_is(topics, 1, tag))
        })
        .last()
        .map(|(_, _, data)| data)
}
