use multiversx_sc::proxy_imports::*;

use crate::types::Spending;

pub struct FundManagementProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FundManagementProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FundManagementProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FundManagementProxyMethods { wrapped_tx: tx }
    }
}

pub struct FundManagementProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> FundManagementProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        admin: Arg0,
        min_deposit: Arg1,
        quorum_bps: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&admin)
            .argument(&min_deposit)
            .argument(&quorum_bps)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FundManagementProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FundManagementProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("deposit")
            .original_result()
    }

    pub fn create_spending<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        receiver: Arg0,
        amount: Arg1,
        purpose: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createSpending")
            .argument(&receiver)
            .argument(&amount)
            .argument(&purpose)
            .original_result()
    }

    pub fn approve_spending<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        spending_id: Arg0,
        approve: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("approveSpending")
            .argument(&spending_id)
            .argument(&approve)
            .original_result()
    }

    pub fn execute_spending<
        Arg0: ProxyArg<u64>,
    >(
        self,
        spending_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeSpending")
            .argument(&spending_id)
            .original_result()
    }

    pub fn admin(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmin")
            .original_result()
    }

    pub fn is_admin<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn is_stakeholder<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isStakeholder")
            .argument(&address)
            .original_result()
    }

    pub fn stakeholder_deposit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        stakeholder: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakeholderDeposit")
            .argument(&stakeholder)
            .original_result()
    }

    pub fn get_stakeholder_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakeholderCount")
            .original_result()
    }

    pub fn get_stakeholders<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakeholders")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn total_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalBalance")
            .original_result()
    }

    pub fn get_spending<
        Arg0: ProxyArg<u64>,
    >(
        self,
        spending_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Spending<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSpending")
            .argument(&spending_id)
            .original_result()
    }

    pub fn spending_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSpendingCount")
            .original_result()
    }

    pub fn get_spendings<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Spending<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSpendings")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_approval_count<
        Arg0: ProxyArg<u64>,
    >(
        self,
        spending_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getApprovalCount")
            .argument(&spending_id)
            .original_result()
    }

    pub fn get_vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        spending_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&spending_id)
            .argument(&voter)
            .original_result()
    }

    pub fn has_quorum<
        Arg0: ProxyArg<u64>,
    >(
        self,
        spending_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasQuorum")
            .argument(&spending_id)
            .original_result()
    }

    pub fn get_fund_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<ManagedAddress<Env::Api>, BigUint<Env::Api>, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundConfig")
            .original_result()
    }
}
