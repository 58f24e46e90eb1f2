multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Spending — a requested disbursement of custody funds
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Spending<M: ManagedTypeApi> {
    /// Dense, 0-based, assigned in creation order.
    pub id: u64,
    pub receiver: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub purpose: ManagedBuffer<M>,
    /// Live count of stakeholders whose current vote is an approval.
    pub approval_count: u64,
    /// Set once, when funds leave the treasury. Terminal.
    pub executed: bool,
}

impl<M: ManagedTypeApi> Spending<M> {
    pub fn new(
        id: u64,
        receiver: ManagedAddress<M>,
        amount: BigUint<M>,
        purpose: ManagedBuffer<M>,
    ) -> Self {
        Spending {
            id,
            receiver,
            amount,
            purpose,
            approval_count: 0,
            executed: false,
        }
    }

    /// Applies a vote transition to the tally. `previous` is the voter's
    /// earlier choice on this spending, if any.
    pub fn apply_vote(&mut self, previous: Option<bool>, approve: bool) {
        match (previous, approve) {
            (None, true) | (Some(false), true) => self.approval_count += 1,
            (Some(true), false) => self.approval_count -= 1,
            _ => {}
        }
    }
}
