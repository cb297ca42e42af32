use multiversx_sc::proxy_imports::*;

/// Proxy for the external contract that carries out passed proposals.
pub struct ExecutionHookProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ExecutionHookProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ExecutionHookProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ExecutionHookProxyMethods { wrapped_tx: tx }
    }
}

pub struct ExecutionHookProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ExecutionHookProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn on_proposal_passed<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        description: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("onProposalPassed")
            .argument(&proposal_id)
            .argument(&description)
            .original_result()
    }
}
