multiversx_sc::imports!();

use crate::errors::{ERR_SPENDING_NOT_FOUND, ERR_ZERO_AMOUNT};
use crate::types::Spending;

// ============================================================
// Spending registry — append-only, ids are dense and 0-based
// ============================================================

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::access_control::AccessControlModule
    + crate::ledger::LedgerModule
    + crate::events::EventsModule
{
    #[endpoint(createSpending)]
    fn create_spending(
        &self,
        receiver: ManagedAddress,
        amount: BigUint,
        purpose: ManagedBuffer,
    ) -> u64 {
        self.require_caller_admin();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let spending_id = self.spending_count().get();
        let spending = Spending::new(spending_id, receiver, amount, purpose);

        self.spendings(spending_id).set(&spending);
        self.spending_count().set(spending_id + 1);

        self.spending_created_event(spending_id, &spending.receiver, &spending.amount);

        spending_id
    }

    fn require_spending_exists(&self, spending_id: u64) {
        require!(
            spending_id < self.spending_count().get(),
            ERR_SPENDING_NOT_FOUND
        );
    }

    fn load_spending(&self, spending_id: u64) -> Spending<Self::Api> {
        self.require_spending_exists(spending_id);
        self.spendings(spending_id).get()
    }

    // ── Views ──

    #[view(getSpending)]
    fn get_spending(&self, spending_id: u64) -> Spending<Self::Api> {
        self.load_spending(spending_id)
    }

    #[view(getSpendings)]
    fn get_spendings(&self, from: u64, count: u64) -> MultiValueEncoded<Spending<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.spending_count().get());

        for spending_id in from..end {
            result.push(self.spendings(spending_id).get());
        }
        result
    }

    #[view(getApprovalCount)]
    fn get_approval_count(&self, spending_id: u64) -> u64 {
        self.load_spending(spending_id).approval_count
    }

    // ── Storage ──

    #[view(getSpendingCount)]
    #[storage_mapper("spendingCount")]
    fn spending_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("spendings")]
    fn spendings(&self, spending_id: u64) -> SingleValueMapper<Spending<Self::Api>>;
}
