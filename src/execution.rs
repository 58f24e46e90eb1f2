multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_EXECUTED, ERR_QUORUM_NOT_MET};

/// Basis points denominator for the quorum fraction
pub const BPS_DENOMINATOR: u64 = 10_000;

#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::voting::VotingModule
    + crate::proposals::ProposalsModule
    + crate::access_control::AccessControlModule
    + crate::ledger::LedgerModule
    + crate::events::EventsModule
{
    /// Pays out a spending once the live stakeholder population approves it.
    /// The executed flag is persisted before funds are sent.
    #[endpoint(executeSpending)]
    fn execute_spending(&self, spending_id: u64) {
        self.require_caller_admin();

        let mut spending = self.load_spending(spending_id);
        require!(!spending.executed, ERR_ALREADY_EXECUTED);
        require!(
            self.quorum_reached(spending.approval_count),
            ERR_QUORUM_NOT_MET
        );

        spending.executed = true;
        self.spendings(spending_id).set(&spending);

        self.transfer_out(&spending.receiver, &spending.amount);
        self.spending_executed_event(spending_id, &spending.receiver, &spending.amount);
    }

    /// approvals / stakeholders >= quorum, compared without division.
    /// An empty stakeholder pool never reaches quorum.
    fn quorum_reached(&self, approval_count: u64) -> bool {
        let stakeholder_count = self.stakeholder_count();
        if stakeholder_count == 0 {
            return false;
        }

        let approved = approval_count as u128 * BPS_DENOMINATOR as u128;
        let required = self.quorum_bps().get() as u128 * stakeholder_count as u128;
        approved >= required
    }

    #[view(hasQuorum)]
    fn has_quorum(&self, spending_id: u64) -> bool {
        let spending = self.load_spending(spending_id);
        self.quorum_reached(spending.approval_count)
    }

    #[storage_mapper("quorumBps")]
    fn quorum_bps(&self) -> SingleValueMapper<u64>;
}
