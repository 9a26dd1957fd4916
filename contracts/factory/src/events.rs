//! Factory events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (admin.clone(),),
    );
}

/// Emitted by every configuration setter, topic carries the field name
pub fn emit_config_updated(env: &Env, field: &str) {
    env.events().publish(
        (Symbol::new(env, "ConfigUpdated"), Symbol::new(env, field)),
        (),
    );
}

/// Emitted when fee tier is updated
pub fn emit_fee_tier_updated(env: &Env, fee_bps: u32, tick_spacing: i32, enabled: bool) {
    env.events().publish(
        (Symbol::new(env, "FeeTierUpdated"),),
        (fee_bps, tick_spacing, enabled),
    );
}

/// Emitted when admin is changed
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}

/// Emitted when a launch registers itself
pub fn emit_launch_registered(
    env: &Env,
    token: &Address,
    launch: &Address,
    creator: &Address,
    index: u32,
) {
    env.events().publish(
        (Symbol::new(env, "LaunchRegistered"), token.clone()),
        (launch.clone(), creator.clone(), index),
    );
}
