#![no_std]

//! Tiered fee split and the fallback leg pipeline shared by every
//! fee-collecting contract.

pub mod error;
pub mod types;
pub mod split;
pub mod distribute;

pub use error::FeeError;
pub use types::{FeeDistribution, FeeLeg, FeeSplit, FeeSplits};
pub use split::{fee_for, split_fee, validate_splits};
pub use distribute::{distribute, FeeSink, LegRecipients};
