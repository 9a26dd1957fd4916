// Fee legs over the native asset contract and the burn accumulator.
// Every external call goes through `try_` so a failing recipient only
// rolls back its own frame.

use soroban_sdk::{token, Address, Env};
use belugalaunch_common::BurnerClient;
use belugalaunch_fees::{FeeLeg, FeeSink};

use crate::events::emit_fee_leg_failed;

pub struct LaunchFeeSink<'a> {
    env: &'a Env,
    native: token::Client<'a>,
    burner: Address,
}

impl<'a> LaunchFeeSink<'a> {
    pub fn new(env: &'a Env, native: &Address, burner: &Address) -> Self {
        Self {
            env,
            native: token::Client::new(env, native),
            burner: burner.clone(),
        }
    }
}

impl FeeSink for LaunchFeeSink<'_> {
    fn deposit_burn(&mut self, amount: i128) -> bool {
        let me = self.env.current_contract_address();
        if self.burner == me {
            return false;
        }

        // the burner pulls with transfer_from; the allowance lives for this ledger only
        let expiration = self.env.ledger().sequence();
        self.native.approve(&me, &self.burner, &amount, &expiration);

        let deposited = matches!(
            BurnerClient::new(self.env, &self.burner).try_deposit(&me, &amount),
            Ok(Ok(_))
        );
        if !deposited {
            self.native.approve(&me, &self.burner, &0, &expiration);
        }
        deposited
    }

    fn transfer(&mut self, to: &Address, amount: i128) -> bool {
        let me = self.env.current_contract_address();
        matches!(self.native.try_transfer(&me, to, &amount), Ok(Ok(())))
    }

    fn leg_failed(&mut self, leg: FeeLeg, recipient: Option<&Address>, amount: i128) {
        emit_fee_leg_failed(self.env, leg, recipient.cloned(), amount);
    }
}
