multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] stakeholder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_deposit: &BigUint,
    );

    #[event("spendingCreated")]
    fn spending_created_event(
        &self,
        #[indexed] spending_id: u64,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] spending_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] approve: bool,
        approval_count: u64,
    );

    /// Emitted once per spending, after the payout has been sent.
    #[event("SpendingExecuted")]
    fn spending_executed_event(
        &self,
        #[indexed] spending_id: u64,
        #[indexed] receiver: &ManagedAddress,
        amount: &BigUint,
    );
}
