// Pure tier-2 / tier-3 arithmetic

use belugalaunch_math::{apply_bps, BPS_DENOMINATOR};
use crate::error::FeeError;
use crate::types::{FeeSplit, FeeSplits};

/// Tier 1: fee held back from a trade amount, truncated. Dust of the
/// truncation stays with the trade amount's complement, never the swap.
#[inline]
pub fn fee_for(amount: i128, total_fee_bps: u32) -> i128 {
    apply_bps(amount, total_fee_bps)
}

pub fn validate_splits(splits: &FeeSplits) -> Result<(), FeeError> {
    let sum = splits.burn_bps as u64 + splits.protocol_bps as u64 + splits.referrer_bps as u64;
    if sum != BPS_DENOMINATOR as u64 {
        return Err(FeeError::InvalidSplits);
    }
    Ok(())
}

/// Tiers 2 and 3. The parts always sum to `fee`; truncation dust is
/// folded into protocol.
pub fn split_fee(
    fee: i128,
    beneficiary_share_bps: u32,
    splits: &FeeSplits,
) -> Result<FeeSplit, FeeError> {
    validate_splits(splits)?;
    if beneficiary_share_bps > BPS_DENOMINATOR {
        return Err(FeeError::InvalidShare);
    }
    if fee <= 0 {
        return Ok(FeeSplit::default());
    }

    let beneficiary = apply_bps(fee, beneficiary_share_bps);
    let remainder = fee - beneficiary;

    let burn = apply_bps(remainder, splits.burn_bps);
    let referrer = apply_bps(remainder, splits.referrer_bps);
    let protocol = apply_bps(remainder, splits.protocol_bps);
    let dust = remainder - (burn + referrer + protocol);

    Ok(FeeSplit {
        beneficiary,
        burn,
        referrer,
        protocol: protocol + dust,
        dust,
    })
}
