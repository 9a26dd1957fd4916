#![no_std]

//! Shared concentrated-liquidity ledger.
//!
//! Pools are identified by `PoolKey` and live side by side in one
//! contract. Value moves through unlock sessions: a locker opens a
//! session, issues commands that accrue per-currency deltas, pays and
//! collects with `settle`/`take`, and closes the session once every delta
//! is back to zero.

use soroban_sdk::{contract, contractimpl, log, token, xdr::ToXdr, Address, Bytes, BytesN, Env, Map};

use belugalaunch_common::{
    BalanceDelta, ModifyLiquidityParams, ModifyLiquidityResult, PoolKey, PositionView, Slot0,
    SwapParams, SwapQuote,
};
use belugalaunch_math::{
    get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio, u128_to_i128_saturating, MAX_SQRT_PRICE, MIN_SQRT_PRICE,
};
use belugalaunch_position::{pending_fees, update_position, validate_position_params};
use belugalaunch_swap::{execute_swap, resolve_price_limit, SwapOutcome};
use belugalaunch_tick::{get_fee_growth_inside, update_tick};

mod error;
mod events;
mod pool_tx;
mod storage;

pub use error::{LedgerError, LedgerErrorMsg};

use error::from_swap_error;
use events::*;
use pool_tx::{simulate, Abort, PoolTx};
use storage::*;

#[contract]
pub struct BelugaLedger;

#[contractimpl]
impl BelugaLedger {
    // ========================================================
    // SESSION
    // ========================================================

    /// Open a session for `locker` and return its single-use token.
    ///
    /// `request` is the locker's own encoded callback request; it only
    /// feeds the token derivation.
    pub fn unlock(env: Env, locker: Address, request: Bytes) -> Result<BytesN<32>, LedgerError> {
        locker.require_auth();

        if read_session(&env).is_some() {
            return Err(LedgerError::AlreadyUnlocked);
        }

        let nonce = next_nonce(&env);
        let mut preimage = request;
        preimage.append(&locker.clone().to_xdr(&env));
        preimage.extend_from_array(&nonce.to_be_bytes());
        let token: BytesN<32> = env.crypto().sha256(&preimage).into();

        write_session(
            &env,
            &Session {
                locker: locker.clone(),
                token: token.clone(),
                nonce,
                deltas: Map::new(&env),
            },
        );
        extend_instance_ttl(&env);

        log!(&env, "session opened", nonce);
        emit_unlocked(&env, &locker, nonce);
        Ok(token)
    }

    /// Close the session. Every currency touched must be settled.
    pub fn lock(env: Env, locker: Address, token: BytesN<32>) -> Result<(), LedgerError> {
        let session = require_session(&env, &token)?;
        if session.locker != locker {
            return Err(LedgerError::InvalidSessionToken);
        }

        for (_, delta) in session.deltas.iter() {
            if delta != 0 {
                return Err(LedgerError::CurrencyNotSettled);
            }
        }

        clear_session(&env);
        emit_locked(&env, &locker, session.nonce);
        Ok(())
    }

    // ========================================================
    // POOLS
    // ========================================================

    /// Create a pool at `sqrt_price_x64`. Returns the initial tick.
    pub fn initialize_pool(env: Env, key: PoolKey, sqrt_price_x64: u128) -> Result<i32, LedgerError> {
        if !key.is_valid() {
            return Err(LedgerError::InvalidPoolKey);
        }
        if !(MIN_SQRT_PRICE..MAX_SQRT_PRICE).contains(&sqrt_price_x64) {
            return Err(LedgerError::InvalidSqrtPrice);
        }

        let pool_id = key.pool_id(&env);
        if has_pool(&env, &pool_id) {
            return Err(LedgerError::PoolAlreadyInitialized);
        }

        let tick = get_tick_at_sqrt_ratio(&env, sqrt_price_x64);
        write_slot0(
            &env,
            &pool_id,
            &Slot0 {
                sqrt_price_x64,
                tick,
                liquidity: 0,
                fee_growth_global_0: 0,
                fee_growth_global_1: 0,
            },
        );

        emit_pool_initialized(&env, &pool_id, &key, sqrt_price_x64, tick);
        Ok(tick)
    }

    /// Add, remove or poke (zero delta) the locker's position.
    ///
    /// The returned delta is principal plus realized fees, from the
    /// locker's side.
    pub fn modify_liquidity(
        env: Env,
        token: BytesN<32>,
        key: PoolKey,
        params: ModifyLiquidityParams,
    ) -> Result<ModifyLiquidityResult, LedgerError> {
        let mut session = require_session(&env, &token)?;
        let ModifyLiquidityParams { tick_lower, tick_upper, liquidity_delta } = params;

        validate_position_params(tick_lower, tick_upper, key.tick_spacing)
            .map_err(|_| LedgerError::InvalidTickRange)?;

        let pool_id = key.pool_id(&env);
        let mut tx = PoolTx::load(&env, &pool_id)?;
        let owner = session.locker.clone();
        let mut pos = read_position(&env, &pool_id, &owner, tick_lower, tick_upper);

        if liquidity_delta < 0 {
            let removed = liquidity_delta.checked_neg().ok_or(LedgerError::InvalidLiquidityDelta)?;
            if pos.liquidity < removed {
                return Err(LedgerError::InsufficientPositionLiquidity);
            }
        } else if liquidity_delta == 0 && pos.liquidity == 0 {
            return Err(LedgerError::InvalidLiquidityDelta);
        }

        let slot0 = tx.slot0;
        if liquidity_delta != 0 {
            let flipped_lower = update_tick(
                &mut tx,
                tick_lower,
                slot0.tick,
                liquidity_delta,
                slot0.fee_growth_global_0,
                slot0.fee_growth_global_1,
                false,
            );
            let flipped_upper = update_tick(
                &mut tx,
                tick_upper,
                slot0.tick,
                liquidity_delta,
                slot0.fee_growth_global_0,
                slot0.fee_growth_global_1,
                true,
            );
            if flipped_lower {
                tx.sync_index(tick_lower);
            }
            if flipped_upper {
                tx.sync_index(tick_upper);
            }
        }

        let (inside_0, inside_1) = get_fee_growth_inside(
            &tx,
            tick_lower,
            tick_upper,
            slot0.tick,
            slot0.fee_growth_global_0,
            slot0.fee_growth_global_1,
        );
        let (fees_0, fees_1) = update_position(&env, &mut pos, liquidity_delta, inside_0, inside_1);
        write_position(&env, &pool_id, &owner, tick_lower, tick_upper, &pos);

        let (principal_0, principal_1) =
            principal_amounts(&env, &slot0, tick_lower, tick_upper, liquidity_delta);

        if liquidity_delta != 0 && slot0.tick >= tick_lower && slot0.tick < tick_upper {
            tx.slot0.liquidity = tx
                .slot0
                .liquidity
                .checked_add(liquidity_delta)
                .ok_or(LedgerError::ArithmeticOverflow)?;
        }
        tx.commit();

        let fees = BalanceDelta::new(u128_to_i128_saturating(fees_0), u128_to_i128_saturating(fees_1));
        let delta = BalanceDelta::new(
            principal_0.checked_add(fees.amount0).ok_or(LedgerError::ArithmeticOverflow)?,
            principal_1.checked_add(fees.amount1).ok_or(LedgerError::ArithmeticOverflow)?,
        );

        account_pool_delta(&mut session, &key, &delta)?;
        write_session(&env, &session);

        emit_modify_liquidity(&env, &pool_id, &owner, tick_lower, tick_upper, liquidity_delta, &delta);
        Ok(ModifyLiquidityResult { delta, fees })
    }

    /// Exact-input swap. Stops early at the price limit.
    pub fn swap(
        env: Env,
        token: BytesN<32>,
        key: PoolKey,
        params: SwapParams,
    ) -> Result<BalanceDelta, LedgerError> {
        let mut session = require_session(&env, &token)?;

        let pool_id = key.pool_id(&env);
        let mut tx = PoolTx::load(&env, &pool_id)?;
        let outcome = run_swap(&env, &mut tx, &key, &params)?;
        let liquidity = tx.slot0.liquidity;
        tx.commit();

        let delta = swap_delta(params.zero_for_one, &outcome);
        account_pool_delta(&mut session, &key, &delta)?;
        write_session(&env, &session);

        emit_swap(
            &env,
            &pool_id,
            &session.locker,
            &delta,
            outcome.fee_paid,
            outcome.sqrt_price_x64,
            liquidity,
            outcome.tick,
        );
        Ok(delta)
    }

    /// Credit whatever was transferred in since the last sync.
    pub fn settle(env: Env, token: BytesN<32>, currency: Address) -> Result<i128, LedgerError> {
        let mut session = require_session(&env, &token)?;

        let balance = token::Client::new(&env, &currency).balance(&env.current_contract_address());
        let reserves = read_reserves(&env, &currency);
        let paid = balance.checked_sub(reserves).ok_or(LedgerError::ArithmeticOverflow)?;
        if paid < 0 {
            return Err(LedgerError::InsufficientReserves);
        }

        write_reserves(&env, &currency, balance);
        add_delta(&mut session, &currency, paid)?;
        write_session(&env, &session);
        Ok(paid)
    }

    /// Pay out of the locker's positive delta.
    pub fn take(
        env: Env,
        token: BytesN<32>,
        currency: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        let mut session = require_session(&env, &token)?;

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }
        let reserves = read_reserves(&env, &currency);
        if reserves < amount {
            return Err(LedgerError::InsufficientReserves);
        }

        add_delta(&mut session, &currency, -amount)?;
        if session.deltas.values().iter().any(|d| d < 0) {
            return Err(LedgerError::OutstandingDebt);
        }

        write_reserves(&env, &currency, reserves - amount);
        write_session(&env, &session);

        token::Client::new(&env, &currency).transfer(&env.current_contract_address(), &to, &amount);
        Ok(())
    }

    // ========================================================
    // QUOTES
    // ========================================================

    /// Result of `swap` with the same arguments, without changing state.
    pub fn quote_swap(env: Env, key: PoolKey, params: SwapParams) -> Result<SwapQuote, LedgerError> {
        let pool_id = key.pool_id(&env);
        simulate(&env, &pool_id, |tx| {
            let outcome = run_swap(&env, tx, &key, &params)?;
            Err(Abort::Quote(SwapQuote {
                amount_in: outcome.amount_in,
                amount_out: outcome.amount_out,
                sqrt_price_x64: outcome.sqrt_price_x64,
                tick: outcome.tick,
            }))
        })
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_slot0(env: Env, key: PoolKey) -> Result<Slot0, LedgerError> {
        read_slot0(&env, &key.pool_id(&env)).ok_or(LedgerError::PoolNotInitialized)
    }

    /// Position liquidity, its token amounts at the current price and the
    /// fees a poke would realize now
    pub fn get_position(
        env: Env,
        key: PoolKey,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<PositionView, LedgerError> {
        validate_position_params(tick_lower, tick_upper, key.tick_spacing)
            .map_err(|_| LedgerError::InvalidTickRange)?;

        let pool_id = key.pool_id(&env);
        let tx = PoolTx::load(&env, &pool_id)?;
        let slot0 = tx.slot0;
        let pos = read_position(&env, &pool_id, &owner, tick_lower, tick_upper);

        let (inside_0, inside_1) = get_fee_growth_inside(
            &tx,
            tick_lower,
            tick_upper,
            slot0.tick,
            slot0.fee_growth_global_0,
            slot0.fee_growth_global_1,
        );
        let (fees_0, fees_1) = pending_fees(&env, &pos, inside_0, inside_1);
        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            slot0.sqrt_price_x64,
            get_sqrt_ratio_at_tick(&env, tick_lower),
            get_sqrt_ratio_at_tick(&env, tick_upper),
            pos.liquidity,
        );

        Ok(PositionView {
            liquidity: pos.liquidity,
            amount0,
            amount1,
            fees_owed_0: u128_to_i128_saturating(fees_0),
            fees_owed_1: u128_to_i128_saturating(fees_1),
        })
    }

    pub fn is_unlocked(env: Env) -> bool {
        read_session(&env).is_some()
    }

    /// Delta of `currency` in the open session, zero without one
    pub fn currency_delta(env: Env, currency: Address) -> i128 {
        read_session(&env)
            .and_then(|s| s.deltas.get(currency))
            .unwrap_or(0)
    }

    pub fn reserves(env: Env, currency: Address) -> i128 {
        read_reserves(&env, &currency)
    }

    pub fn pool_id(env: Env, key: PoolKey) -> BytesN<32> {
        key.pool_id(&env)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn require_session(env: &Env, token: &BytesN<32>) -> Result<Session, LedgerError> {
    let session = read_session(env).ok_or(LedgerError::NotUnlocked)?;
    if &session.token != token {
        return Err(LedgerError::InvalidSessionToken);
    }
    session.locker.require_auth();
    Ok(session)
}

fn add_delta(session: &mut Session, currency: &Address, amount: i128) -> Result<(), LedgerError> {
    if amount == 0 {
        return Ok(());
    }
    let current = session.deltas.get(currency.clone()).unwrap_or(0);
    let next = current.checked_add(amount).ok_or(LedgerError::ArithmeticOverflow)?;
    session.deltas.set(currency.clone(), next);
    Ok(())
}

fn account_pool_delta(session: &mut Session, key: &PoolKey, delta: &BalanceDelta) -> Result<(), LedgerError> {
    add_delta(session, &key.currency0, delta.amount0)?;
    add_delta(session, &key.currency1, delta.amount1)
}

/// Shared by `swap` and `quote_swap`
fn run_swap(
    env: &Env,
    tx: &mut PoolTx,
    key: &PoolKey,
    params: &SwapParams,
) -> Result<SwapOutcome, LedgerError> {
    if params.amount_in <= 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let limit = resolve_price_limit(
        tx.slot0.sqrt_price_x64,
        params.sqrt_price_limit_x64,
        params.zero_for_one,
    )
    .map_err(from_swap_error)?;

    let mut state = tx.swap_state();
    let index = tx.index.clone();
    let outcome = execute_swap(
        env,
        &mut state,
        &mut *tx,
        &index,
        params.zero_for_one,
        params.amount_in,
        limit,
        key.fee_bps,
    )
    .map_err(from_swap_error)?;

    tx.apply_swap_state(&state);
    Ok(outcome)
}

fn swap_delta(zero_for_one: bool, outcome: &SwapOutcome) -> BalanceDelta {
    if zero_for_one {
        BalanceDelta::new(-outcome.amount_in, outcome.amount_out)
    } else {
        BalanceDelta::new(outcome.amount_out, -outcome.amount_in)
    }
}

/// Token amounts moved by a liquidity change at the current price.
/// Owed amounts round up and are negative; received amounts round down.
fn principal_amounts(env: &Env, slot0: &Slot0, lower: i32, upper: i32, liquidity_delta: i128) -> (i128, i128) {
    if liquidity_delta == 0 {
        return (0, 0);
    }

    let adding = liquidity_delta > 0;
    let liquidity = liquidity_delta.unsigned_abs();
    let sqrt_lower = get_sqrt_ratio_at_tick(env, lower);
    let sqrt_upper = get_sqrt_ratio_at_tick(env, upper);

    let (amount0, amount1) = if slot0.tick < lower {
        (get_amount_0_delta(env, sqrt_lower, sqrt_upper, liquidity, adding), 0)
    } else if slot0.tick < upper {
        (
            get_amount_0_delta(env, slot0.sqrt_price_x64, sqrt_upper, liquidity, adding),
            get_amount_1_delta(env, sqrt_lower, slot0.sqrt_price_x64, liquidity, adding),
        )
    } else {
        (0, get_amount_1_delta(env, sqrt_lower, sqrt_upper, liquidity, adding))
    };

    let amount0 = u128_to_i128_saturating(amount0);
    let amount1 = u128_to_i128_saturating(amount1);
    if adding {
        (-amount0, -amount1)
    } else {
        (amount0, amount1)
    }
}
