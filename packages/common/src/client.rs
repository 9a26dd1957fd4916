// Cross-contract interfaces. The generated `try_` methods are the
// graceful-degradation path: a failing callee rolls back its own frame
// and the caller decides what to do.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

use crate::error::LedgerError;
use crate::types::{
    BalanceDelta, LaunchConfig, ModifyLiquidityParams, ModifyLiquidityResult, PoolKey,
    PositionView, Slot0, SwapParams, SwapQuote,
};

#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn unlock(env: Env, locker: Address, request: Bytes) -> Result<BytesN<32>, LedgerError>;
    fn lock(env: Env, locker: Address, token: BytesN<32>) -> Result<(), LedgerError>;

    fn initialize_pool(env: Env, key: PoolKey, sqrt_price_x64: u128) -> Result<i32, LedgerError>;
    fn modify_liquidity(
        env: Env,
        token: BytesN<32>,
        key: PoolKey,
        params: ModifyLiquidityParams,
    ) -> Result<ModifyLiquidityResult, LedgerError>;
    fn swap(
        env: Env,
        token: BytesN<32>,
        key: PoolKey,
        params: SwapParams,
    ) -> Result<BalanceDelta, LedgerError>;
    fn settle(env: Env, token: BytesN<32>, currency: Address) -> Result<i128, LedgerError>;
    fn take(
        env: Env,
        token: BytesN<32>,
        currency: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError>;

    fn quote_swap(env: Env, key: PoolKey, params: SwapParams) -> Result<SwapQuote, LedgerError>;
    fn get_slot0(env: Env, key: PoolKey) -> Result<Slot0, LedgerError>;
    fn get_position(
        env: Env,
        key: PoolKey,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<PositionView, LedgerError>;
    fn is_unlocked(env: Env) -> bool;
    fn currency_delta(env: Env, currency: Address) -> i128;
    fn reserves(env: Env, currency: Address) -> i128;
    fn pool_id(env: Env, key: PoolKey) -> BytesN<32>;
}

/// Subset of the factory read by launches
#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn get_config(env: Env) -> LaunchConfig;
    fn register_launch(env: Env, launch: Address, token: Address, creator: Address) -> u32;
}

/// Subset of the burn accumulator used by fee payers
#[contractclient(name = "BurnerClient")]
pub trait BurnerInterface {
    fn deposit(env: Env, from: Address, amount: i128) -> i128;
}
