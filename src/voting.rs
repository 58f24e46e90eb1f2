multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_EXECUTED;

// ============================================================
// Voting — one vote per (spending, stakeholder), changeable
// until the spending is executed
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule:
    crate::proposals::ProposalsModule
    + crate::access_control::AccessControlModule
    + crate::ledger::LedgerModule
    + crate::events::EventsModule
{
    /// Records the caller's approval (`true`) or disapproval (`false`).
    /// A repeated vote with the same value leaves the tally untouched; a
    /// flipped vote moves the tally by one in the matching direction.
    #[endpoint(approveSpending)]
    fn approve_spending(&self, spending_id: u64, approve: bool) {
        let mut spending = self.load_spending(spending_id);

        let caller = self.blockchain().get_caller();
        self.require_stakeholder(&caller);
        require!(!spending.executed, ERR_ALREADY_EXECUTED);

        let previous = self.votes(spending_id).insert(caller.clone(), approve);
        spending.apply_vote(previous, approve);
        self.spendings(spending_id).set(&spending);

        self.vote_event(spending_id, &caller, approve, spending.approval_count);
    }

    #[view(getVote)]
    fn get_vote(&self, spending_id: u64, voter: ManagedAddress) -> OptionalValue<bool> {
        self.votes(spending_id).get(&voter).into()
    }

    #[storage_mapper("votes")]
    fn votes(&self, spending_id: u64) -> MapMapper<ManagedAddress, bool>;
}
