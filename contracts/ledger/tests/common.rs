#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Bytes, BytesN, Env,
};
use belugalaunch_common::{BalanceDelta, ModifyLiquidityParams, PoolKey, SwapParams};
use belugalaunch_ledger::{BelugaLedger, BelugaLedgerClient};
use belugalaunch_math::SQRT_PRICE_1_1;

pub const FEE_BPS: u32 = 30;
pub const TICK_SPACING: i32 = 60;
pub const LOWER: i32 = -600;
pub const UPPER: i32 = 600;
pub const LIQUIDITY: i128 = 1_000_000_000;
/// Owed per side when adding LIQUIDITY over [LOWER, UPPER] at price 1.0
pub const DEPOSIT_PER_SIDE: i128 = 29_553_011;
pub const USER_FUNDS: i128 = 1_000_000_000_000;

pub struct Setup<'a> {
    pub env: Env,
    pub ledger: BelugaLedgerClient<'a>,
    pub token0: Address,
    pub token1: Address,
    pub user: Address,
    pub key: PoolKey,
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

/// Ledger plus a 30 bps pool key over two fresh tokens. The pool is not
/// initialized.
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let ledger_id = env.register(BelugaLedger, ());
    let ledger = BelugaLedgerClient::new(&env, &ledger_id);

    let a = create_token(&env, &admin);
    let b = create_token(&env, &admin);
    let key = PoolKey::new(a, b, FEE_BPS, TICK_SPACING, Address::generate(&env));

    let user = Address::generate(&env);
    mint_tokens(&env, &key.currency0, &user, USER_FUNDS);
    mint_tokens(&env, &key.currency1, &user, USER_FUNDS);

    Setup {
        token0: key.currency0.clone(),
        token1: key.currency1.clone(),
        env,
        ledger,
        user,
        key,
    }
}

/// Initialized pool at price 1.0 with LIQUIDITY over [LOWER, UPPER]
pub fn setup_with_liquidity<'a>() -> Setup<'a> {
    let s = setup();
    s.ledger.initialize_pool(&s.key, &SQRT_PRICE_1_1);
    add_liquidity(&s, LOWER, UPPER, LIQUIDITY);
    s
}

pub fn request(env: &Env) -> Bytes {
    Bytes::from_slice(env, b"test-request")
}

pub fn open(s: &Setup) -> BytesN<32> {
    s.ledger.unlock(&s.user, &request(&s.env))
}

/// Transfer `amount` from the user into the ledger and settle it
pub fn pay(s: &Setup, token: &BytesN<32>, currency: &Address, amount: i128) {
    TokenClient::new(&s.env, currency).transfer(&s.user, &s.ledger.address, &amount);
    s.ledger.settle(token, currency);
}

/// Settle or take whatever the session delta says, then lock
pub fn close_out(s: &Setup, token: &BytesN<32>, delta: &BalanceDelta) {
    for (currency, amount) in [(&s.token0, delta.amount0), (&s.token1, delta.amount1)] {
        if amount < 0 {
            pay(s, token, currency, -amount);
        }
    }
    for (currency, amount) in [(&s.token0, delta.amount0), (&s.token1, delta.amount1)] {
        if amount > 0 {
            s.ledger.take(token, currency, &s.user, &amount);
        }
    }
    s.ledger.lock(&s.user, token);
}

pub fn add_liquidity(s: &Setup, lower: i32, upper: i32, liquidity: i128) -> BalanceDelta {
    let token = open(s);
    let result = s.ledger.modify_liquidity(
        &token,
        &s.key,
        &ModifyLiquidityParams { tick_lower: lower, tick_upper: upper, liquidity_delta: liquidity },
    );
    close_out(s, &token, &result.delta);
    result.delta
}

pub fn swap(s: &Setup, zero_for_one: bool, amount_in: i128, limit: u128) -> BalanceDelta {
    let token = open(s);
    let delta = s.ledger.swap(
        &token,
        &s.key,
        &SwapParams { zero_for_one, amount_in, sqrt_price_limit_x64: limit },
    );
    close_out(s, &token, &delta);
    delta
}
