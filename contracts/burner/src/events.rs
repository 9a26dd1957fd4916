//! Burner events

use soroban_sdk::{Address, Env, Symbol};

pub fn emit_initialized(env: &Env, admin: &Address, burn_token: &Address) {
    env.events().publish(
        (Symbol::new(env, "BurnerInit"),),
        (admin.clone(), burn_token.clone()),
    );
}

pub fn emit_deposit(env: &Env, from: &Address, amount: i128, pending: i128) {
    env.events().publish(
        (Symbol::new(env, "BurnDeposit"), from.clone()),
        (amount, pending),
    );
}

/// `spent` native bought and burned `burned` tokens
pub fn emit_flushed(env: &Env, spent: i128, burned: i128, pending: i128) {
    env.events().publish(
        (Symbol::new(env, "Flushed"),),
        (spent, burned, pending),
    );
}

pub fn emit_flush_failed(env: &Env, reason: &str, amount: i128, pending: i128) {
    env.events().publish(
        (Symbol::new(env, "FlushFailed"), Symbol::new(env, reason)),
        (amount, pending),
    );
}

pub fn emit_paused(env: &Env, admin: &Address) {
    env.events().publish((Symbol::new(env, "Paused"),), admin.clone());
}

pub fn emit_unpaused(env: &Env, admin: &Address) {
    env.events().publish((Symbol::new(env, "Unpaused"),), admin.clone());
}

pub fn emit_config_updated(env: &Env, field: &str) {
    env.events().publish(
        (Symbol::new(env, "BurnerConfig"), Symbol::new(env, field)),
        (),
    );
}
