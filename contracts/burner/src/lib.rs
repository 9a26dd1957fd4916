#![no_std]

//! # BelugaLaunch Burner
//!
//! Burn accumulator. Fee payers deposit native; a flush buys the burn
//! token with the whole pending balance in one swap and burns it.
//!
//! A flush is retriable by anyone and never fails because of the pool:
//! failures are reported as `FlushFailed(reason)` and leave the pending
//! balance untouched.

use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, BytesN, Env, Bytes};

use belugalaunch_common::{LedgerClient, PoolKey, ReentrancyGuard, SwapParams};

mod error;
mod events;
mod storage;
mod types;

pub use error::{BurnerError, BurnerErrorMsg};
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct BelugaBurner;

#[contractimpl]
impl BelugaBurner {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        ledger: Address,
        native: Address,
        burn_token: Address,
        pool_key: PoolKey,
        flush_threshold: i128,
    ) -> Result<(), BurnerError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(BurnerError::AlreadyInitialized);
        }
        if flush_threshold < 0 {
            return Err(BurnerError::InvalidThreshold);
        }

        write_admin(&env, &admin);
        write_config(
            &env,
            &BurnerConfig { ledger, native, burn_token: burn_token.clone(), pool_key, flush_threshold },
        );
        write_pending(&env, 0);
        extend_instance_ttl(&env);

        emit_initialized(&env, &admin, &burn_token);
        Ok(())
    }

    // ========================================================
    // ACCUMULATE / FLUSH (Write)
    // ========================================================

    /// Pull `amount` native from `from` (allowance to this contract) and
    /// add it to the pending balance. Returns the pending balance after
    /// any auto-flush.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, BurnerError> {
        from.require_auth();

        let config = read_config(&env).ok_or(BurnerError::NotInitialized)?;
        if is_paused(&env) {
            return Err(BurnerError::Paused);
        }
        if amount <= 0 {
            return Err(BurnerError::InvalidAmount);
        }

        guarded(&env, || {
            let me = env.current_contract_address();
            token::Client::new(&env, &config.native).transfer_from(&me, &from, &me, &amount);

            let pending = read_pending(&env) + amount;
            write_pending(&env, pending);
            emit_deposit(&env, &from, amount, pending);

            if config.flush_threshold > 0 && pending >= config.flush_threshold {
                flush_pending(&env, &config)?;
            }

            extend_instance_ttl(&env);
            Ok(read_pending(&env))
        })
    }

    /// Swap the pending balance for the burn token and burn it.
    ///
    /// Returns the amount burned; zero when there was nothing to flush or
    /// the attempt failed.
    pub fn flush(env: Env) -> Result<i128, BurnerError> {
        let config = read_config(&env).ok_or(BurnerError::NotInitialized)?;
        if is_paused(&env) {
            return Err(BurnerError::Paused);
        }

        guarded(&env, || flush_pending(&env, &config))
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn pause(env: Env) -> Result<(), BurnerError> {
        let admin = require_admin(&env)?;
        set_paused(&env, true);
        emit_paused(&env, &admin);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), BurnerError> {
        let admin = require_admin(&env)?;
        set_paused(&env, false);
        emit_unpaused(&env, &admin);
        Ok(())
    }

    pub fn set_flush_threshold(env: Env, flush_threshold: i128) -> Result<(), BurnerError> {
        require_admin(&env)?;
        if flush_threshold < 0 {
            return Err(BurnerError::InvalidThreshold);
        }
        let mut config = read_config(&env).ok_or(BurnerError::NotInitialized)?;
        config.flush_threshold = flush_threshold;
        write_config(&env, &config);
        emit_config_updated(&env, "flush_threshold");
        Ok(())
    }

    /// Not validated here: a key that does not pair native with the burn
    /// token makes every flush fail with `pool_mismatch`.
    pub fn set_pool_key(env: Env, pool_key: PoolKey) -> Result<(), BurnerError> {
        require_admin(&env)?;
        let mut config = read_config(&env).ok_or(BurnerError::NotInitialized)?;
        config.pool_key = pool_key;
        write_config(&env, &config);
        emit_config_updated(&env, "pool_key");
        Ok(())
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), BurnerError> {
        require_admin(&env)?;
        new_admin.require_auth();
        write_admin(&env, &new_admin);
        emit_config_updated(&env, "admin");
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn pending(env: Env) -> i128 {
        read_pending(&env)
    }

    pub fn phase(env: Env) -> BurnPhase {
        if is_flushing(&env) {
            BurnPhase::Flushing
        } else if read_pending(&env) > 0 {
            BurnPhase::Accumulating
        } else {
            BurnPhase::Idle
        }
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn get_config(env: Env) -> Result<BurnerConfig, BurnerError> {
        read_config(&env).ok_or(BurnerError::NotInitialized)
    }

    pub fn get_admin(env: Env) -> Result<Address, BurnerError> {
        read_admin(&env).ok_or(BurnerError::NotInitialized)
    }
}

// ============================================================
// FLUSH ENGINE
// ============================================================

/// One flush attempt. Spends at most `min(pending, balance)`.
fn flush_pending(env: &Env, config: &BurnerConfig) -> Result<i128, BurnerError> {
    let me = env.current_contract_address();
    let pending = read_pending(env);
    let balance = token::Client::new(env, &config.native).balance(&me);
    let amount = pending.min(balance);
    if amount <= 0 {
        return Ok(0);
    }

    set_flushing(env, true);
    let outcome = try_swap_and_burn(env, config, amount);
    set_flushing(env, false);

    match outcome? {
        Ok((spent, burned)) => {
            let remaining = pending - spent;
            write_pending(env, remaining);
            log!(env, "flushed", spent, burned);
            emit_flushed(env, spent, burned, remaining);
            Ok(burned)
        }
        Err(failure) => {
            emit_flush_failed(env, failure.reason(), amount, pending);
            Ok(0)
        }
    }
}

/// Inner error: classified failure that leaves everything untouched.
/// Outer error: accounting broke after the swap went through, with the
/// ledger session still open; only a frame rollback can undo it.
fn try_swap_and_burn(
    env: &Env,
    config: &BurnerConfig,
    amount: i128,
) -> Result<Result<(i128, i128), FlushFailure>, BurnerError> {
    let key = &config.pool_key;
    if config.native == config.burn_token
        || !key.contains(&config.native)
        || !key.contains(&config.burn_token)
    {
        return Ok(Err(FlushFailure::PoolMismatch));
    }

    let ledger = LedgerClient::new(env, &config.ledger);
    let zero_for_one = key.currency0 == config.native;
    // one shot at the directional extreme; partial fills are accepted
    let params = SwapParams { zero_for_one, amount_in: amount, sqrt_price_limit_x64: 0 };

    match ledger.try_quote_swap(key, &params) {
        Ok(Ok(quote)) if quote.amount_out > 0 => {}
        Ok(Ok(_)) => return Ok(Err(FlushFailure::ZeroOutput)),
        _ => return Ok(Err(FlushFailure::QuoteFailed)),
    }

    let me = env.current_contract_address();
    let session = match ledger.try_unlock(&me, &flush_request(env, amount)) {
        Ok(Ok(session)) => session,
        _ => return Ok(Err(FlushFailure::SwapFailed)),
    };

    let delta = match ledger.try_swap(&session, key, &params) {
        Ok(Ok(delta)) => delta,
        _ => {
            // nothing accrued; close the session untouched
            close_session(&ledger, &me, &session)?;
            return Ok(Err(FlushFailure::SwapFailed));
        }
    };

    let (input, output) = delta.by_direction(zero_for_one);
    let spent = -input;
    if spent <= 0 || output <= 0 || spent > amount {
        return Err(BurnerError::SettlementFailed);
    }

    let native = token::Client::new(env, &config.native);
    native.transfer(&me, &ledger.address, &spent);
    let credited = match ledger.try_settle(&session, &config.native) {
        Ok(Ok(credited)) if credited >= spent => credited,
        _ => return Err(BurnerError::SettlementFailed),
    };
    // unsolicited transfers to the ledger are credited with ours
    let surplus = credited - spent;
    if surplus > 0 && !matches!(ledger.try_take(&session, &config.native, &me, &surplus), Ok(Ok(()))) {
        return Err(BurnerError::SettlementFailed);
    }
    if !matches!(ledger.try_take(&session, &config.burn_token, &me, &output), Ok(Ok(()))) {
        return Err(BurnerError::SettlementFailed);
    }
    close_session(&ledger, &me, &session)?;

    token::Client::new(env, &config.burn_token).burn(&me, &output);
    Ok(Ok((spent, output)))
}

fn close_session(ledger: &LedgerClient, me: &Address, session: &BytesN<32>) -> Result<(), BurnerError> {
    match ledger.try_lock(me, session) {
        Ok(Ok(())) => Ok(()),
        _ => Err(BurnerError::SettlementFailed),
    }
}

fn flush_request(env: &Env, amount: i128) -> Bytes {
    let mut request = Bytes::from_slice(env, b"flush");
    request.extend_from_array(&amount.to_be_bytes());
    request
}

// ============================================================
// HELPER FUNCTIONS
// ============================================================

fn require_admin(env: &Env) -> Result<Address, BurnerError> {
    let admin = read_admin(env).ok_or(BurnerError::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

fn guarded<T>(env: &Env, f: impl FnOnce() -> Result<T, BurnerError>) -> Result<T, BurnerError> {
    let key = symbol_short!("guard");
    if !ReentrancyGuard::enter(env, &key) {
        return Err(BurnerError::Reentrant);
    }
    let result = f();
    ReentrancyGuard::exit(env, &key);
    result
}
