#![no_std]

//! # BelugaLaunch Token
//!
//! One launch contract per token. It mints the fixed supply, seeds a
//! single-sided position in the shared ledger at the cheap end of the
//! configured range and trades against it with a tiered fee.
//!
//! ## Functions:
//! - Write (4): initialize, buy, sell, harvest_rewards
//! - Read (7): quote_buy, quote_sell, get_state, get_phase, pending_rewards, pool_key, get_slot0
//!
//! Ledger interaction follows the session protocol: `unlock` with the
//! encoded `LaunchRequest`, run the request's commands with the returned
//! token, then `lock`.

use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, xdr::ToXdr, Address, BytesN, Env,
    InvokeError,
};

use belugalaunch_common::{
    FactoryClient, LaunchConfig, LedgerClient, LedgerError, ModifyLiquidityParams, PoolKey,
    ReentrancyGuard, Slot0, SwapParams,
};
use belugalaunch_fees::{distribute, fee_for, FeeDistribution, LegRecipients};
use belugalaunch_math::{
    apply_bps, get_liquidity_for_amount0, get_liquidity_for_amount1, get_sqrt_ratio_at_tick,
    scale_sqrt_price_bps, BPS_DENOMINATOR,
};

mod error;
mod events;
mod fee_sink;
mod storage;
mod types;

pub use error::{LaunchError, LaunchErrorMsg};
use events::*;
use fee_sink::LaunchFeeSink;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaLaunch;

#[contractimpl]
impl BelugaLaunch {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Mint the supply, bootstrap the pool and register with the factory.
    ///
    /// Configured ticks are token per native. When the token sorts as
    /// currency1 the position is [lower, upper] starting at `upper`;
    /// otherwise it is mirrored to [-upper, -lower] starting at `-upper`.
    /// Either way the position holds only tokens and the first buyer gets
    /// the best price.
    pub fn initialize(env: Env, params: LaunchParams) -> Result<PoolKey, LaunchError> {
        params.creator.require_auth();

        if has_state(&env) {
            return Err(LaunchError::AlreadyInitialized);
        }

        guarded(&env, || {
            let config = read_config(&env, &params.factory)?;
            if params.total_fee_bps > config.max_total_fee_bps {
                return Err(LaunchError::InvalidFeeConfig);
            }
            if params.beneficiary_share_bps > BPS_DENOMINATOR {
                return Err(LaunchError::InvalidShare);
            }
            if params.token == config.native {
                return Err(LaunchError::InvalidToken);
            }

            let me = env.current_contract_address();

            // Supply
            token::StellarAssetClient::new(&env, &params.token).mint(&me, &config.total_supply);
            let creator_reward = apply_bps(config.total_supply, config.creator_reward_bps);
            if creator_reward > 0 {
                token::Client::new(&env, &params.token).transfer(&me, &params.creator, &creator_reward);
            }
            let pool_supply = config.total_supply - creator_reward;

            // Position
            let key = PoolKey::new(
                config.native.clone(),
                params.token.clone(),
                config.pool_fee_bps,
                config.tick_spacing,
                me.clone(),
            );
            let token_is_currency1 = key.currency1 == params.token;
            let (tick_lower, tick_upper) = if token_is_currency1 {
                (config.tick_lower, config.tick_upper)
            } else {
                (-config.tick_upper, -config.tick_lower)
            };
            let sqrt_lower = get_sqrt_ratio_at_tick(&env, tick_lower);
            let sqrt_upper = get_sqrt_ratio_at_tick(&env, tick_upper);
            let (liquidity, start_price) = if token_is_currency1 {
                (get_liquidity_for_amount1(&env, sqrt_lower, sqrt_upper, pool_supply), sqrt_upper)
            } else {
                (get_liquidity_for_amount0(&env, sqrt_lower, sqrt_upper, pool_supply), sqrt_lower)
            };
            if liquidity <= 0 {
                return Err(LaunchError::BootstrapFailed);
            }

            let ledger = LedgerClient::new(&env, &config.ledger);
            ledger_call(ledger.try_initialize_pool(&key, &start_price))?;

            let state = LaunchState {
                factory: params.factory.clone(),
                creator: params.creator.clone(),
                beneficiary: params.beneficiary.clone(),
                token: params.token.clone(),
                native: config.native.clone(),
                ledger: config.ledger.clone(),
                pool_key: key.clone(),
                tick_lower,
                tick_upper,
                liquidity,
                total_fee_bps: params.total_fee_bps,
                beneficiary_share_bps: params.beneficiary_share_bps,
            };
            write_state(&env, &state);
            write_phase(&env, Phase::Uninitialized);

            let request = LaunchRequest::Bootstrap(liquidity);
            let deposited = run_session(&env, &ledger, &request, |session| {
                settle_bootstrap(&env, &ledger, &state, session)
            })?;
            write_phase(&env, Phase::PoolBootstrapped);
            emit_bootstrapped(&env, &key.pool_id(&env), tick_lower, tick_upper, liquidity, deposited);

            let index = FactoryClient::new(&env, &params.factory).register_launch(
                &me,
                &params.token,
                &params.creator,
            );
            write_phase(&env, Phase::Trading);
            extend_instance_ttl(&env);

            log!(&env, "launch bootstrapped", liquidity, deposited);
            emit_launched(&env, &params.token, &params.creator, creator_reward, index);
            Ok(key)
        })
    }

    // ========================================================
    // TRADING (Write)
    // ========================================================

    /// Buy tokens with `amount_in` native. All or nothing.
    ///
    /// The fee is taken from the input and distributed before the ledger
    /// session opens. `min_out == 0` disables the floor and a zero
    /// `sqrt_price_limit_x64` selects the directional extreme.
    pub fn buy(
        env: Env,
        buyer: Address,
        amount_in: i128,
        recipient: Address,
        referrer: Option<Address>,
        min_out: i128,
        sqrt_price_limit_x64: u128,
    ) -> Result<i128, LaunchError> {
        buyer.require_auth();

        guarded(&env, || {
            let (state, config) = load_trading(&env)?;

            if amount_in <= 0 || amount_in < config.min_order_size {
                return Err(LaunchError::OrderTooSmall);
            }
            check_recipient(&env, &state, &recipient)?;

            let fee = fee_for(amount_in, state.total_fee_bps);
            let net_in = amount_in - fee;
            if net_in <= 0 {
                return Err(LaunchError::OrderTooSmall);
            }

            let ledger = LedgerClient::new(&env, &state.ledger);
            let price_before = read_slot0(&ledger, &state.pool_key)?.sqrt_price_x64;

            let me = env.current_contract_address();
            token::Client::new(&env, &state.native).transfer(&buyer, &me, &amount_in);

            let fees = distribute_fee(&env, &state, &config, fee, referrer)?;

            let trade = TradeRequest {
                trader: buyer.clone(),
                recipient: recipient.clone(),
                amount_in: net_in,
                min_out,
                sqrt_price_limit_x64,
            };
            let request = LaunchRequest::Buy(trade.clone());
            let amount_out = run_session(&env, &ledger, &request, |session| {
                settle_buy(&env, &ledger, &state, session, &trade)
            })?;

            let price_after = read_slot0(&ledger, &state.pool_key)?.sqrt_price_x64;
            extend_instance_ttl(&env);

            emit_trade(
                &env, "buy", &buyer, &recipient, amount_in, fee, net_in, amount_out, price_before,
                price_after, &fees,
            );
            Ok(amount_out)
        })
    }

    /// Sell `amount_in` tokens for native. Returns native after fees.
    ///
    /// The fee comes out of the ledger output and `min_out` is checked
    /// after it. A price limit may stop the swap early; unconsumed tokens
    /// go back to the seller.
    pub fn sell(
        env: Env,
        seller: Address,
        amount_in: i128,
        recipient: Address,
        referrer: Option<Address>,
        min_out: i128,
        sqrt_price_limit_x64: u128,
    ) -> Result<i128, LaunchError> {
        seller.require_auth();

        guarded(&env, || {
            let (state, config) = load_trading(&env)?;

            if amount_in <= 0 {
                return Err(LaunchError::InvalidAmount);
            }
            check_recipient(&env, &state, &recipient)?;

            let ledger = LedgerClient::new(&env, &state.ledger);
            let price_before = read_slot0(&ledger, &state.pool_key)?.sqrt_price_x64;

            let me = env.current_contract_address();
            let launched = token::Client::new(&env, &state.token);
            launched.transfer(&seller, &me, &amount_in);

            let trade = TradeRequest {
                trader: seller.clone(),
                recipient: recipient.clone(),
                amount_in,
                min_out,
                sqrt_price_limit_x64,
            };
            let request = LaunchRequest::Sell(trade.clone());
            let fill = run_session(&env, &ledger, &request, |session| {
                settle_sell(&env, &ledger, &state, session, &trade)
            })?;

            let refund = amount_in - fill.consumed;
            if refund > 0 {
                launched.transfer(&me, &seller, &refund);
            }

            let fees = distribute_fee(&env, &state, &config, fill.fee, referrer)?;

            let price_after = read_slot0(&ledger, &state.pool_key)?.sqrt_price_x64;
            extend_instance_ttl(&env);

            emit_trade(
                &env, "sell", &seller, &recipient, amount_in, fill.fee, fill.consumed, fill.net_out,
                price_before, price_after, &fees,
            );
            Ok(fill.net_out)
        })
    }

    // ========================================================
    // REWARDS (Write)
    // ========================================================

    /// Collect LP fees, convert the token side to native and distribute.
    ///
    /// Permissionless. The conversion is bounded by `sqrt_price_x64`
    /// moved `slippage_bps` in the sell direction. A conversion that
    /// cannot fill completely is deferred into the pending-reward balance
    /// and retried on the next harvest; it never fails the call.
    pub fn harvest_rewards(
        env: Env,
        sqrt_price_x64: u128,
        slippage_bps: u32,
    ) -> Result<HarvestResult, LaunchError> {
        guarded(&env, || {
            let (state, config) = load_trading(&env)?;

            if slippage_bps > config.max_slippage_bps {
                return Err(LaunchError::InvalidSlippage);
            }
            if sqrt_price_x64 == 0 {
                return Err(LaunchError::InvalidPriceLimit);
            }

            // zero_for_one swaps move the price down
            let sell_zero_for_one = !state.buy_zero_for_one();
            let limit = scale_sqrt_price_bps(&env, sqrt_price_x64, slippage_bps, !sell_zero_for_one);

            let pending = read_pending_rewards(&env);
            let ledger = LedgerClient::new(&env, &state.ledger);
            let request = LaunchRequest::Harvest(limit);
            let conversion = run_session(&env, &ledger, &request, |session| {
                settle_harvest(&env, &ledger, &state, session, pending, limit)
            })?;

            let pending_after = match conversion.deferred {
                Some(reason) => {
                    let total = conversion.token_fees + pending;
                    emit_reward_deferred(&env, reason, conversion.token_fees, total);
                    total
                }
                None => 0,
            };
            write_pending_rewards(&env, pending_after);

            let native_total = conversion.native_fees + conversion.converted_out;
            let distribution = distribute_fee(&env, &state, &config, native_total, None)?;

            let result = HarvestResult {
                native_fees: conversion.native_fees,
                token_fees: conversion.token_fees,
                converted_in: conversion.converted_in,
                converted_out: conversion.converted_out,
                native_total,
                pending: pending_after,
                distribution,
            };
            extend_instance_ttl(&env);

            emit_harvest(&env, &result);
            Ok(result)
        })
    }

    // ========================================================
    // QUOTES (Read)
    // ========================================================

    /// Simulated buy. Fails with `PartialFill` if the pool cannot absorb
    /// the whole net input.
    pub fn quote_buy(env: Env, amount_in: i128) -> Result<TradeQuote, LaunchError> {
        let state = read_trading_state(&env)?;
        if amount_in <= 0 {
            return Err(LaunchError::InvalidAmount);
        }

        let fee = fee_for(amount_in, state.total_fee_bps);
        let net_in = amount_in - fee;
        if net_in <= 0 {
            return Err(LaunchError::InvalidAmount);
        }

        let ledger = LedgerClient::new(&env, &state.ledger);
        let params = SwapParams {
            zero_for_one: state.buy_zero_for_one(),
            amount_in: net_in,
            sqrt_price_limit_x64: 0,
        };
        let quote = ledger_call(ledger.try_quote_swap(&state.pool_key, &params))?;
        if quote.amount_in < net_in {
            return Err(LaunchError::PartialFill);
        }

        Ok(TradeQuote {
            fee_bps: state.total_fee_bps,
            fee,
            net_in,
            amount_out: quote.amount_out,
            sqrt_price_after: quote.sqrt_price_x64,
        })
    }

    /// Simulated sell. `net_in` is the consumed token input and
    /// `amount_out` the native output after the fee.
    pub fn quote_sell(env: Env, amount_in: i128) -> Result<TradeQuote, LaunchError> {
        let state = read_trading_state(&env)?;
        if amount_in <= 0 {
            return Err(LaunchError::InvalidAmount);
        }

        let ledger = LedgerClient::new(&env, &state.ledger);
        let params = SwapParams {
            zero_for_one: !state.buy_zero_for_one(),
            amount_in,
            sqrt_price_limit_x64: 0,
        };
        let quote = ledger_call(ledger.try_quote_swap(&state.pool_key, &params))?;
        let fee = fee_for(quote.amount_out, state.total_fee_bps);

        Ok(TradeQuote {
            fee_bps: state.total_fee_bps,
            fee,
            net_in: quote.amount_in,
            amount_out: quote.amount_out - fee,
            sqrt_price_after: quote.sqrt_price_x64,
        })
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_state(env: Env) -> Result<LaunchState, LaunchError> {
        read_state(&env).ok_or(LaunchError::NotInitialized)
    }

    pub fn get_phase(env: Env) -> Phase {
        read_phase(&env)
    }

    /// Tokens awaiting conversion
    pub fn pending_rewards(env: Env) -> i128 {
        read_pending_rewards(&env)
    }

    pub fn pool_key(env: Env) -> Result<PoolKey, LaunchError> {
        read_state(&env)
            .map(|s| s.pool_key)
            .ok_or(LaunchError::NotInitialized)
    }

    pub fn get_slot0(env: Env) -> Result<Slot0, LaunchError> {
        let state = read_state(&env).ok_or(LaunchError::NotInitialized)?;
        read_slot0(&LedgerClient::new(&env, &state.ledger), &state.pool_key)
    }
}

// ============================================================
// SESSION CALLBACKS
// ============================================================

/// Consumed input and output of a sell, from the ledger's side
struct SellFill {
    consumed: i128,
    fee: i128,
    net_out: i128,
}

struct Conversion {
    native_fees: i128,
    token_fees: i128,
    converted_in: i128,
    converted_out: i128,
    deferred: Option<&'static str>,
}

/// Add the position and pay the token side. Returns tokens deposited.
fn settle_bootstrap(
    env: &Env,
    ledger: &LedgerClient,
    state: &LaunchState,
    session: &BytesN<32>,
) -> Result<i128, LaunchError> {
    let params = ModifyLiquidityParams {
        tick_lower: state.tick_lower,
        tick_upper: state.tick_upper,
        liquidity_delta: state.liquidity,
    };
    let result = ledger_call(ledger.try_modify_liquidity(session, &state.pool_key, &params))?;

    let (native_side, token_side) = state.by_currency(&result.delta);
    if native_side != 0 || token_side >= 0 {
        return Err(LaunchError::InvalidDelta);
    }

    let owed = -token_side;
    pay_ledger(env, ledger, session, &state.token, owed)?;
    Ok(owed)
}

fn settle_buy(
    env: &Env,
    ledger: &LedgerClient,
    state: &LaunchState,
    session: &BytesN<32>,
    trade: &TradeRequest,
) -> Result<i128, LaunchError> {
    let zero_for_one = state.buy_zero_for_one();
    let params = SwapParams {
        zero_for_one,
        amount_in: trade.amount_in,
        sqrt_price_limit_x64: trade.sqrt_price_limit_x64,
    };
    let delta = ledger_call(ledger.try_swap(session, &state.pool_key, &params))?;

    let (input, output) = delta.by_direction(zero_for_one);
    if input >= 0 || output <= 0 || -input > trade.amount_in {
        return Err(LaunchError::InvalidDelta);
    }
    if -input < trade.amount_in {
        return Err(LaunchError::PartialFill);
    }
    if output < trade.min_out {
        return Err(LaunchError::SlippageExceeded);
    }

    pay_ledger(env, ledger, session, &state.native, -input)?;
    ledger_call(ledger.try_take(session, &state.token, &trade.recipient, &output))?;
    Ok(output)
}

fn settle_sell(
    env: &Env,
    ledger: &LedgerClient,
    state: &LaunchState,
    session: &BytesN<32>,
    trade: &TradeRequest,
) -> Result<SellFill, LaunchError> {
    let zero_for_one = !state.buy_zero_for_one();
    let params = SwapParams {
        zero_for_one,
        amount_in: trade.amount_in,
        sqrt_price_limit_x64: trade.sqrt_price_limit_x64,
    };
    let delta = ledger_call(ledger.try_swap(session, &state.pool_key, &params))?;

    let (input, output) = delta.by_direction(zero_for_one);
    if input >= 0 || output <= 0 || -input > trade.amount_in {
        return Err(LaunchError::InvalidDelta);
    }

    let consumed = -input;
    let fee = fee_for(output, state.total_fee_bps);
    let net_out = output - fee;
    if net_out < trade.min_out {
        return Err(LaunchError::SlippageExceeded);
    }

    pay_ledger(env, ledger, session, &state.token, consumed)?;
    if net_out > 0 {
        ledger_call(ledger.try_take(session, &state.native, &trade.recipient, &net_out))?;
    }
    if fee > 0 {
        let me = env.current_contract_address();
        ledger_call(ledger.try_take(session, &state.native, &me, &fee))?;
    }

    Ok(SellFill { consumed, fee, net_out })
}

/// Poke the position, collect both fee sides and try to convert the
/// token side plus `pending` into native.
fn settle_harvest(
    env: &Env,
    ledger: &LedgerClient,
    state: &LaunchState,
    session: &BytesN<32>,
    pending: i128,
    limit: u128,
) -> Result<Conversion, LaunchError> {
    let me = env.current_contract_address();
    let poke = ModifyLiquidityParams {
        tick_lower: state.tick_lower,
        tick_upper: state.tick_upper,
        liquidity_delta: 0,
    };
    let result = ledger_call(ledger.try_modify_liquidity(session, &state.pool_key, &poke))?;
    let (native_fees, token_fees) = state.by_currency(&result.fees);

    if native_fees > 0 {
        ledger_call(ledger.try_take(session, &state.native, &me, &native_fees))?;
    }
    if token_fees > 0 {
        ledger_call(ledger.try_take(session, &state.token, &me, &token_fees))?;
    }

    let mut conversion = Conversion {
        native_fees,
        token_fees,
        converted_in: 0,
        converted_out: 0,
        deferred: None,
    };

    let total = token_fees + pending;
    if total <= 0 {
        return Ok(conversion);
    }

    let zero_for_one = !state.buy_zero_for_one();
    let params = SwapParams { zero_for_one, amount_in: total, sqrt_price_limit_x64: limit };

    conversion.deferred = match ledger.try_quote_swap(&state.pool_key, &params) {
        Ok(Ok(quote)) if quote.amount_out <= 0 => Some("zero_out"),
        Ok(Ok(quote)) if quote.amount_in < total => Some("partial_fill"),
        Ok(Ok(_)) => None,
        _ => Some("quote_fail"),
    };
    if conversion.deferred.is_some() {
        return Ok(conversion);
    }

    match ledger.try_swap(session, &state.pool_key, &params) {
        Ok(Ok(delta)) => {
            let (input, output) = delta.by_direction(zero_for_one);
            if input >= 0 || output <= 0 {
                return Err(LaunchError::InvalidDelta);
            }
            pay_ledger(env, ledger, session, &state.token, -input)?;
            ledger_call(ledger.try_take(session, &state.native, &me, &output))?;
            conversion.converted_in = -input;
            conversion.converted_out = output;
        }
        _ => conversion.deferred = Some("swap_fail"),
    }

    Ok(conversion)
}

// ============================================================
// HELPER FUNCTIONS
// ============================================================

type LedgerResult<T, C> = Result<Result<T, C>, Result<LedgerError, InvokeError>>;

/// Unwrap a `try_` ledger call into a launch error
fn ledger_call<T, C>(result: LedgerResult<T, C>) -> Result<T, LaunchError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err.into()),
        _ => Err(LaunchError::LedgerCallFailed),
    }
}

/// Open a session for `request`, run `callback` with its token and close it.
fn run_session<T>(
    env: &Env,
    ledger: &LedgerClient,
    request: &LaunchRequest,
    callback: impl FnOnce(&BytesN<32>) -> Result<T, LaunchError>,
) -> Result<T, LaunchError> {
    let me = env.current_contract_address();
    let session = ledger_call(ledger.try_unlock(&me, &request.clone().to_xdr(env)))?;
    let out = callback(&session)?;
    ledger_call(ledger.try_lock(&me, &session))?;
    Ok(out)
}

/// Transfer `amount` of `currency` into the ledger and settle it.
///
/// `settle` credits everything sent to the ledger since its last sync,
/// including unsolicited transfers; that surplus is taken back so the
/// session still closes flat.
fn pay_ledger(
    env: &Env,
    ledger: &LedgerClient,
    session: &BytesN<32>,
    currency: &Address,
    amount: i128,
) -> Result<(), LaunchError> {
    if amount <= 0 {
        return Ok(());
    }
    let me = env.current_contract_address();
    token::Client::new(env, currency).transfer(&me, &ledger.address, &amount);
    let credited = ledger_call(ledger.try_settle(session, currency))?;
    if credited < amount {
        return Err(LaunchError::SettlementFailed);
    }
    let surplus = credited - amount;
    if surplus > 0 {
        log!(env, "ledger surplus reclaimed", surplus);
        ledger_call(ledger.try_take(session, currency, &me, &surplus))?;
    }
    Ok(())
}

fn read_slot0(ledger: &LedgerClient, key: &PoolKey) -> Result<Slot0, LaunchError> {
    ledger_call(ledger.try_get_slot0(key))
}

fn read_config(env: &Env, factory: &Address) -> Result<LaunchConfig, LaunchError> {
    match FactoryClient::new(env, factory).try_get_config() {
        Ok(Ok(config)) => Ok(config),
        _ => Err(LaunchError::FactoryUnavailable),
    }
}

fn read_trading_state(env: &Env) -> Result<LaunchState, LaunchError> {
    let state = read_state(env).ok_or(LaunchError::NotInitialized)?;
    if read_phase(env) != Phase::Trading {
        return Err(LaunchError::NotTrading);
    }
    Ok(state)
}

/// State plus the live factory configuration
fn load_trading(env: &Env) -> Result<(LaunchState, LaunchConfig), LaunchError> {
    let state = read_trading_state(env)?;
    let config = read_config(env, &state.factory)?;
    Ok((state, config))
}

/// The launch itself and the ledger stand in for an unset address
fn is_unset(env: &Env, state: &LaunchState, who: &Address) -> bool {
    who == &env.current_contract_address() || who == &state.ledger
}

fn check_recipient(env: &Env, state: &LaunchState, recipient: &Address) -> Result<(), LaunchError> {
    if is_unset(env, state, recipient) {
        return Err(LaunchError::InvalidRecipient);
    }
    Ok(())
}

fn distribute_fee(
    env: &Env,
    state: &LaunchState,
    config: &LaunchConfig,
    fee: i128,
    referrer: Option<Address>,
) -> Result<FeeDistribution, LaunchError> {
    if fee <= 0 {
        return Ok(FeeDistribution::default());
    }

    let recipients = LegRecipients {
        beneficiary: state.beneficiary.clone(),
        referrer: referrer.filter(|r| !is_unset(env, state, r)),
        protocol: config.protocol_recipient.clone(),
    };
    let mut sink = LaunchFeeSink::new(env, &state.native, &config.burner);
    let (requested, paid) = distribute(
        &mut sink,
        fee,
        state.beneficiary_share_bps,
        &config.fee_splits,
        &recipients,
    )?;

    emit_fee_distributed(env, &requested, &paid);
    Ok(paid)
}

/// Run `f` under the reentrancy guard
fn guarded<T>(env: &Env, f: impl FnOnce() -> Result<T, LaunchError>) -> Result<T, LaunchError> {
    let key = symbol_short!("guard");
    if !ReentrancyGuard::enter(env, &key) {
        return Err(LaunchError::Reentrant);
    }
    let result = f();
    ReentrancyGuard::exit(env, &key);
    result
}
