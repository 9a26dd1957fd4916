#![no_std]

//! # BelugaLaunch Factory
//!
//! Live configuration store for token launches.
//!
//! ## Responsibilities:
//! 1. Serve the launch configuration, validated on every write
//! 2. Fee tier standardization
//! 3. Launch registry with duplicate prevention

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use belugalaunch_common::LaunchConfig;
use belugalaunch_fees::{validate_splits, FeeSplits};
use belugalaunch_math::{BPS_DENOMINATOR, MAX_TICK, MAX_TICK_SPACING, MIN_TICK};

mod error;
mod events;
mod storage;
mod types;

pub use error::{FactoryError, FactoryErrorMsg};
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaFactory;

#[contractimpl]
impl BelugaFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize factory
    ///
    /// Seeds the default fee tiers, then takes `tick_spacing` from the
    /// tier named by `config.pool_fee_bps`.
    pub fn initialize(env: Env, admin: Address, config: LaunchConfig) -> Result<(), FactoryError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        Self::init_fee_tiers(&env);

        let mut config = config;
        let tier = enabled_tier(&env, config.pool_fee_bps)?;
        config.tick_spacing = tier.tick_spacing;
        validate_config(&env, &config)?;

        write_admin(&env, &admin);
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &admin);
        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Current launch configuration
    pub fn get_config(env: Env) -> Result<LaunchConfig, FactoryError> {
        read_config(&env).ok_or(FactoryError::NotInitialized)
    }

    pub fn get_admin(env: Env) -> Result<Address, FactoryError> {
        read_admin(&env).ok_or(FactoryError::NotInitialized)
    }

    /// Get fee tier configuration
    pub fn get_fee_tier(env: Env, fee_bps: u32) -> Option<FeeTier> {
        read_fee_tier(&env, fee_bps)
    }

    pub fn get_launch(env: Env, token: Address) -> Option<LaunchInfo> {
        read_launch(&env, &token)
    }

    /// Every registered launch, oldest first
    pub fn get_all_launches(env: Env) -> Vec<LaunchInfo> {
        let mut launches = Vec::new(&env);
        for token in read_launch_list(&env).iter() {
            if let Some(info) = read_launch(&env, &token) {
                launches.push_back(info);
            }
        }
        launches
    }

    pub fn get_total_launches(env: Env) -> u32 {
        read_launch_list(&env).len()
    }

    // ========================================================
    // LAUNCH REGISTRY
    // ========================================================

    /// Record a launch. Called by the launch contract itself once its
    /// pool is live. One launch per token.
    pub fn register_launch(
        env: Env,
        launch: Address,
        token: Address,
        creator: Address,
    ) -> Result<u32, FactoryError> {
        launch.require_auth();

        if !is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }
        if read_launch(&env, &token).is_some() {
            return Err(FactoryError::LaunchAlreadyRegistered);
        }

        let index = add_to_launch_list(&env, &token);
        write_launch(
            &env,
            &LaunchInfo {
                launch: launch.clone(),
                token: token.clone(),
                creator: creator.clone(),
                index,
                created_at: env.ledger().sequence(),
            },
        );

        emit_launch_registered(&env, &token, &launch, &creator, index);
        Ok(index)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_fee_splits(env: Env, splits: FeeSplits) -> Result<(), FactoryError> {
        update_config(&env, "fee_splits", |c| c.fee_splits = splits)
    }

    pub fn set_tick_range(env: Env, tick_lower: i32, tick_upper: i32) -> Result<(), FactoryError> {
        update_config(&env, "tick_range", |c| {
            c.tick_lower = tick_lower;
            c.tick_upper = tick_upper;
        })
    }

    pub fn set_max_slippage_bps(env: Env, bps: u32) -> Result<(), FactoryError> {
        update_config(&env, "max_slippage_bps", |c| c.max_slippage_bps = bps)
    }

    pub fn set_min_order_size(env: Env, amount: i128) -> Result<(), FactoryError> {
        update_config(&env, "min_order_size", |c| c.min_order_size = amount)
    }

    pub fn set_max_total_fee_bps(env: Env, bps: u32) -> Result<(), FactoryError> {
        update_config(&env, "max_total_fee_bps", |c| c.max_total_fee_bps = bps)
    }

    pub fn set_creator_reward_bps(env: Env, bps: u32) -> Result<(), FactoryError> {
        update_config(&env, "creator_reward_bps", |c| c.creator_reward_bps = bps)
    }

    pub fn set_total_supply(env: Env, amount: i128) -> Result<(), FactoryError> {
        update_config(&env, "total_supply", |c| c.total_supply = amount)
    }

    pub fn set_protocol_recipient(env: Env, recipient: Address) -> Result<(), FactoryError> {
        update_config(&env, "protocol_recipient", |c| c.protocol_recipient = recipient)
    }

    pub fn set_burner(env: Env, burner: Address) -> Result<(), FactoryError> {
        update_config(&env, "burner", |c| c.burner = burner)
    }

    /// Switch the launch pool fee; tick spacing follows the tier
    pub fn set_pool_fee(env: Env, fee_bps: u32) -> Result<(), FactoryError> {
        let tier = enabled_tier(&env, fee_bps)?;
        update_config(&env, "pool_fee", |c| {
            c.pool_fee_bps = tier.fee_bps;
            c.tick_spacing = tier.tick_spacing;
        })
    }

    /// Add or update fee tier configuration. The tier in use by the
    /// launch configuration cannot be disabled or respaced.
    pub fn set_fee_tier(
        env: Env,
        fee_bps: u32,
        tick_spacing: i32,
        enabled: bool,
    ) -> Result<(), FactoryError> {
        let config = read_config(&env).ok_or(FactoryError::NotInitialized)?;
        require_admin(&env)?;

        if tick_spacing <= 0 || tick_spacing > MAX_TICK_SPACING {
            return Err(FactoryError::InvalidTickSpacing);
        }
        if fee_bps == 0 || fee_bps >= BPS_DENOMINATOR {
            return Err(FactoryError::InvalidFeeTier);
        }
        if fee_bps == config.pool_fee_bps && (!enabled || tick_spacing != config.tick_spacing) {
            return Err(FactoryError::InvalidFeeTier);
        }

        write_fee_tier(&env, fee_bps, &FeeTier { fee_bps, tick_spacing, enabled });

        emit_fee_tier_updated(&env, fee_bps, tick_spacing, enabled);
        Ok(())
    }

    /// Transfer admin role to new address
    /// Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), FactoryError> {
        let admin = require_admin(&env)?;
        new_admin.require_auth();

        write_admin(&env, &new_admin);

        emit_admin_updated(&env, &admin, &new_admin);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn init_fee_tiers(env: &Env) {
        // Stablecoin: 0.05%
        write_fee_tier(env, 5, &FeeTier {
            fee_bps: 5,
            tick_spacing: 10,
            enabled: true,
        });

        // Volatile: 0.30%
        write_fee_tier(env, 30, &FeeTier {
            fee_bps: 30,
            tick_spacing: 60,
            enabled: true,
        });

        // Meme/Exotic: 1.00%
        write_fee_tier(env, 100, &FeeTier {
            fee_bps: 100,
            tick_spacing: 200,
            enabled: true,
        });
    }
}

// ============================================================
// VALIDATION
// ============================================================

fn require_admin(env: &Env) -> Result<Address, FactoryError> {
    let admin = read_admin(env).ok_or(FactoryError::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

fn enabled_tier(env: &Env, fee_bps: u32) -> Result<FeeTier, FactoryError> {
    read_fee_tier(env, fee_bps)
        .filter(|t| t.enabled)
        .ok_or(FactoryError::InvalidFeeTier)
}

/// Admin-gated read-modify-validate-write of the configuration
fn update_config<F>(env: &Env, field: &str, apply: F) -> Result<(), FactoryError>
where
    F: FnOnce(&mut LaunchConfig),
{
    let mut config = read_config(env).ok_or(FactoryError::NotInitialized)?;
    require_admin(env)?;

    apply(&mut config);
    validate_config(env, &config)?;
    write_config(env, &config);

    emit_config_updated(env, field);
    Ok(())
}

/// Every invariant the launch contract relies on
fn validate_config(env: &Env, config: &LaunchConfig) -> Result<(), FactoryError> {
    validate_splits(&config.fee_splits)?;

    let tier = enabled_tier(env, config.pool_fee_bps)?;
    if tier.tick_spacing != config.tick_spacing {
        return Err(FactoryError::InvalidTickSpacing);
    }

    let (lower, upper) = (config.tick_lower, config.tick_upper);
    if lower >= upper || lower < MIN_TICK || upper > MAX_TICK {
        return Err(FactoryError::InvalidTickRange);
    }
    if lower % config.tick_spacing != 0 || upper % config.tick_spacing != 0 {
        return Err(FactoryError::InvalidTickSpacing);
    }

    if config.max_slippage_bps > BPS_DENOMINATOR
        || config.max_total_fee_bps > BPS_DENOMINATOR
        || config.creator_reward_bps >= BPS_DENOMINATOR
    {
        return Err(FactoryError::InvalidBps);
    }

    if config.min_order_size < 0 || config.total_supply <= 0 {
        return Err(FactoryError::InvalidAmount);
    }

    Ok(())
}
