multiversx_sc::imports!();

use crate::errors::{ERR_DEPOSIT_BELOW_MINIMUM, ERR_INSUFFICIENT_FUNDS};

// ============================================================
// Treasury ledger — custody balance and per-stakeholder deposits
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: crate::events::EventsModule {
    /// Registers the attached EGLD as stake for the caller. The payment is
    /// part of the same transaction, so a rejected deposit is refunded by
    /// the VM together with every other write.
    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            payment_amount >= self.min_deposit().get(),
            ERR_DEPOSIT_BELOW_MINIMUM
        );

        self.stakeholder_deposit(&caller)
            .update(|deposit| *deposit += &payment_amount);
        self.total_balance()
            .update(|balance| *balance += &payment_amount);
        self.stakeholders().insert(caller.clone());

        let total_deposit = self.stakeholder_deposit(&caller).get();
        self.deposit_event(&caller, &payment_amount, &total_deposit);
    }

    /// Moves `amount` out of custody to `receiver`. Only reachable from
    /// spending execution.
    fn transfer_out(&self, receiver: &ManagedAddress, amount: &BigUint) {
        let balance = self.total_balance().get();
        require!(amount <= &balance, ERR_INSUFFICIENT_FUNDS);

        self.total_balance().set(&(balance - amount));
        self.send().direct_egld(receiver, amount);
    }

    fn stakeholder_count(&self) -> u64 {
        self.stakeholders().len() as u64
    }

    // ── Views ──

    #[view(getStakeholderCount)]
    fn get_stakeholder_count(&self) -> u64 {
        self.stakeholder_count()
    }

    #[view(getStakeholders)]
    fn get_stakeholders(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.stakeholders().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for (idx, stakeholder) in self.stakeholders().iter().enumerate() {
            let idx = idx as u64;
            if idx >= end {
                break;
            }
            if idx >= from {
                result.push(stakeholder);
            }
        }
        result
    }

    // ── Storage ──

    #[view(getStakeholderDeposit)]
    #[storage_mapper("stakeholderDeposit")]
    fn stakeholder_deposit(&self, stakeholder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakeholders")]
    fn stakeholders(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getTotalBalance)]
    #[storage_mapper("totalBalance")]
    fn total_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minDeposit")]
    fn min_deposit(&self) -> SingleValueMapper<BigUint>;
}
