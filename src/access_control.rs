multiversx_sc::imports!();

use crate::errors::{ERR_ADMIN_ONLY, ERR_NOT_STAKEHOLDER};

/// Roles are derived from state: the admin is fixed at deployment and a
/// stakeholder is anyone holding a nonzero deposit.
#[multiversx_sc::module]
pub trait AccessControlModule: crate::ledger::LedgerModule + crate::events::EventsModule {
    #[view(isAdmin)]
    fn is_admin(&self, address: &ManagedAddress) -> bool {
        address == &self.admin().get()
    }

    #[view(isStakeholder)]
    fn is_stakeholder(&self, address: &ManagedAddress) -> bool {
        self.stakeholder_deposit(address).get() > 0u64
    }

    fn require_caller_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), ERR_ADMIN_ONLY);
    }

    fn require_stakeholder(&self, address: &ManagedAddress) {
        require!(self.is_stakeholder(address), ERR_NOT_STAKEHOLDER);
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;
}
