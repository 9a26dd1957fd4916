#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events as _, IssuerFlags},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Symbol, TryFromVal, Val, Vec,
};
use belugalaunch_burner::{BelugaBurner, BelugaBurnerClient};
use belugalaunch_common::{LaunchConfig, PoolKey};
use belugalaunch_factory::{BelugaFactory, BelugaFactoryClient};
use belugalaunch_fees::FeeSplits;
use belugalaunch_ledger::{BelugaLedger, BelugaLedgerClient};
use belugalaunch_token::{BelugaLaunch, BelugaLaunchClient, LaunchParams};

pub const TOTAL_SUPPLY: i128 = 1_000_000_000_000_000;
pub const CREATOR_REWARD_BPS: u32 = 500;
pub const CREATOR_REWARD: i128 = 50_000_000_000_000;
pub const TOTAL_FEE_BPS: u32 = 300;
pub const SHARE_BPS: u32 = 2500;
pub const MIN_ORDER: i128 = 1_000;
pub const MAX_SLIPPAGE_BPS: u32 = 500;
pub const BUYER_FUNDS: i128 = 1_000_000_000_000;

pub struct Setup<'a> {
    pub env: Env,
    pub launch: BelugaLaunchClient<'a>,
    pub ledger: BelugaLedgerClient<'a>,
    pub factory: BelugaFactoryClient<'a>,
    pub burner: BelugaBurnerClient<'a>,
    pub native: Address,
    pub token: Address,
    pub admin: Address,
    pub creator: Address,
    pub beneficiary: Address,
    pub protocol: Address,
    pub referrer: Address,
    pub buyer: Address,
}

/// Native balances of every fee recipient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balances {
    pub beneficiary: i128,
    pub burner: i128,
    pub referrer: i128,
    pub protocol: i128,
    pub buyer: i128,
}

impl Balances {
    pub fn diff(&self, before: &Balances) -> Balances {
        Balances {
            beneficiary: self.beneficiary - before.beneficiary,
            burner: self.burner - before.burner,
            referrer: self.referrer - before.referrer,
            protocol: self.protocol - before.protocol,
            buyer: self.buyer - before.buyer,
        }
    }
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

/// Ledger, burner, factory and one launched token
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let issuer = Address::generate(&env);
    let native_sac = env.register_stellar_asset_contract_v2(issuer.clone());
    // recipients get deauthorized to inject transfer failures
    native_sac.issuer().set_flag(IssuerFlags::RevocableFlag);
    let native = native_sac.address();

    let ledger_id = env.register(BelugaLedger, ());
    let ledger = BelugaLedgerClient::new(&env, &ledger_id);

    // Burner pool is never initialized; the launch only deposits
    let burn_token = env.register_stellar_asset_contract_v2(issuer).address();
    let burner_id = env.register(BelugaBurner, ());
    let burner = BelugaBurnerClient::new(&env, &burner_id);
    let burn_key = PoolKey::new(native.clone(), burn_token.clone(), 30, 60, burner_id.clone());
    burner.initialize(&admin, &ledger_id, &native, &burn_token, &burn_key, &0);

    let protocol = Address::generate(&env);
    let factory_id = env.register(BelugaFactory, ());
    let factory = BelugaFactoryClient::new(&env, &factory_id);
    factory.initialize(
        &admin,
        &LaunchConfig {
            ledger: ledger_id.clone(),
            native: native.clone(),
            protocol_recipient: protocol.clone(),
            burner: burner_id.clone(),
            fee_splits: FeeSplits { burn_bps: 5000, protocol_bps: 3000, referrer_bps: 2000 },
            pool_fee_bps: 30,
            tick_spacing: 0,
            tick_lower: 0,
            tick_upper: 69_060,
            max_slippage_bps: MAX_SLIPPAGE_BPS,
            min_order_size: MIN_ORDER,
            max_total_fee_bps: 1_000,
            creator_reward_bps: CREATOR_REWARD_BPS,
            total_supply: TOTAL_SUPPLY,
        },
    );

    let creator = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let (launch, token) = new_launch(&env);
    launch.initialize(&LaunchParams {
        factory: factory_id,
        creator: creator.clone(),
        beneficiary: beneficiary.clone(),
        token: token.clone(),
        total_fee_bps: TOTAL_FEE_BPS,
        beneficiary_share_bps: SHARE_BPS,
    });

    let buyer = Address::generate(&env);
    let referrer = Address::generate(&env);
    StellarAssetClient::new(&env, &native).mint(&buyer, &BUYER_FUNDS);

    Setup {
        env,
        launch,
        ledger,
        factory,
        burner,
        native,
        token,
        admin,
        creator,
        beneficiary,
        protocol,
        referrer,
        buyer,
    }
}

/// Uninitialized launch plus a token it administers
pub fn new_launch<'a>(env: &Env) -> (BelugaLaunchClient<'a>, Address) {
    let launch_id = env.register(BelugaLaunch, ());
    let token = env.register_stellar_asset_contract_v2(launch_id.clone()).address();
    (BelugaLaunchClient::new(env, &launch_id), token)
}

pub fn snapshot(s: &Setup) -> Balances {
    Balances {
        beneficiary: balance(&s.env, &s.native, &s.beneficiary),
        burner: balance(&s.env, &s.native, &s.burner.address),
        referrer: balance(&s.env, &s.native, &s.referrer),
        protocol: balance(&s.env, &s.native, &s.protocol),
        buyer: balance(&s.env, &s.native, &s.buyer),
    }
}

pub fn buy(s: &Setup, amount: i128, referrer: Option<Address>) -> i128 {
    s.launch.buy(&s.buyer, &amount, &s.buyer, &referrer, &0, &0)
}

pub fn sell(s: &Setup, seller: &Address, amount: i128) -> i128 {
    s.launch.sell(seller, &amount, seller, &None, &0, &0)
}

pub fn deauthorize(s: &Setup, who: &Address) {
    StellarAssetClient::new(&s.env, &s.native).set_authorized(who, &false);
}

pub fn pool_key(s: &Setup) -> PoolKey {
    s.launch.pool_key()
}

/// Token-side LP fees a poke would realize now
pub fn token_fees_owed(s: &Setup) -> i128 {
    let state = s.launch.get_state();
    let view = s.ledger.get_position(
        &state.pool_key,
        &s.launch.address,
        &state.tick_lower,
        &state.tick_upper,
    );
    if state.pool_key.currency0 == s.token {
        view.fees_owed_0
    } else {
        view.fees_owed_1
    }
}

pub fn sqrt_price(s: &Setup) -> u128 {
    s.launch.get_slot0().sqrt_price_x64
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
