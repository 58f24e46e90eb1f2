#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod errors;
pub mod events;
pub mod execution;
pub mod fund_management_proxy;
pub mod ledger;
pub mod proposals;
pub mod types;
pub mod voting;

use errors::{ERR_INVALID_MIN_DEPOSIT, ERR_INVALID_QUORUM};
use execution::BPS_DENOMINATOR;

// ============================================================
// Contract
// ============================================================

/// Stakeholder-governed treasury. Deposits make the sender a stakeholder,
/// the admin proposes spendings, stakeholders approve them, and the admin
/// executes a spending once enough stakeholders approve.
#[multiversx_sc::contract]
pub trait FundManagement:
    events::EventsModule
    + ledger::LedgerModule
    + access_control::AccessControlModule
    + proposals::ProposalsModule
    + voting::VotingModule
    + execution::ExecutionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `quorum_bps` is the approving share of stakeholders required for
    /// execution, in basis points (8_000 = 80%).
    #[init]
    fn init(&self, admin: ManagedAddress, min_deposit: BigUint, quorum_bps: u64) {
        require!(min_deposit > 0u64, ERR_INVALID_MIN_DEPOSIT);
        require!(
            quorum_bps > 0 && quorum_bps <= BPS_DENOMINATOR,
            ERR_INVALID_QUORUM
        );

        self.admin().set(&admin);
        self.min_deposit().set(&min_deposit);
        self.quorum_bps().set(quorum_bps);
        self.total_balance().set(BigUint::zero());
        self.spending_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFundConfig)]
    fn get_fund_config(&self) -> MultiValue3<ManagedAddress, BigUint, u64> {
        let admin = self.admin().get();
        let min_deposit = self.min_deposit().get();
        let quorum_bps = self.quorum_bps().get();
        (admin, min_deposit, quorum_bps).into()
    }
}
