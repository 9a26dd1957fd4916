// Fallback leg pipeline
//
// Legs run in a fixed order: burn deposit, beneficiary, referrer, then
// protocol with everything the earlier legs could not deliver. Only the
// protocol leg may fail the call.

use soroban_sdk::Address;
use crate::error::FeeError;
use crate::split::split_fee;
use crate::types::{FeeDistribution, FeeLeg, FeeSplit, FeeSplits};

/// Transfer side of the pipeline, implemented by each fee-collecting contract.
pub trait FeeSink {
    /// Deposit into the burn accumulator. `false` when the deposit failed
    /// and the funds are still held by the caller.
    fn deposit_burn(&mut self, amount: i128) -> bool;

    /// Pay `amount` to `to`. `false` when the transfer failed.
    fn transfer(&mut self, to: &Address, amount: i128) -> bool;

    /// Diagnostic hook for a non-fatal leg whose amount was folded into protocol.
    fn leg_failed(&mut self, leg: FeeLeg, recipient: Option<&Address>, amount: i128);
}

/// Who receives each leg
#[derive(Clone, Debug)]
pub struct LegRecipients {
    pub beneficiary: Address,
    pub referrer: Option<Address>,
    pub protocol: Address,
}

/// Split `fee` and push it through the legs.
///
/// Returns the requested split and what was actually delivered.
pub fn distribute<S: FeeSink>(
    sink: &mut S,
    fee: i128,
    beneficiary_share_bps: u32,
    splits: &FeeSplits,
    recipients: &LegRecipients,
) -> Result<(FeeSplit, FeeDistribution), FeeError> {
    let split = split_fee(fee, beneficiary_share_bps, splits)?;
    let mut paid = FeeDistribution::default();
    let mut protocol_total = split.protocol;

    if split.burn > 0 {
        if sink.deposit_burn(split.burn) {
            paid.burn = split.burn;
        } else {
            protocol_total += split.burn;
            sink.leg_failed(FeeLeg::Burn, None, split.burn);
        }
    }

    if split.beneficiary > 0 {
        if sink.transfer(&recipients.beneficiary, split.beneficiary) {
            paid.beneficiary = split.beneficiary;
        } else {
            protocol_total += split.beneficiary;
            sink.leg_failed(FeeLeg::Beneficiary, Some(&recipients.beneficiary), split.beneficiary);
        }
    }

    if split.referrer > 0 {
        match &recipients.referrer {
            Some(referrer) if sink.transfer(referrer, split.referrer) => {
                paid.referrer = split.referrer;
            }
            Some(referrer) => {
                protocol_total += split.referrer;
                sink.leg_failed(FeeLeg::Referrer, Some(referrer), split.referrer);
            }
            None => protocol_total += split.referrer,
        }
    }

    if protocol_total > 0 {
        if !sink.transfer(&recipients.protocol, protocol_total) {
            return Err(FeeError::ProtocolTransferFailed);
        }
        paid.protocol = protocol_total;
    }

    Ok((split, paid))
}
