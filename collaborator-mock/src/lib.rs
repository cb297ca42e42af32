#![no_std]

multiversx_sc::imports!();

pub mod collaborator_mock_proxy;

/// Test double for the DAO's external collaborators: a fungible balance
/// ledger answering `balanceOf`, and an execution hook that records every
/// proposal it is told has passed.
#[multiversx_sc::contract]
pub trait CollaboratorMock {
    #[init]
    fn init(&self) {}

    // ── Ledger ──

    #[endpoint(setBalance)]
    fn set_balance(&self, address: ManagedAddress, amount: BigUint) {
        self.balances(&address).set(&amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    // ── Execution hook ──

    #[endpoint(onProposalPassed)]
    fn on_proposal_passed(&self, proposal_id: u64, description: ManagedBuffer) {
        self.passed_proposals().push(&proposal_id);
        self.last_description().set(&description);
    }

    #[view(getPassedProposals)]
    fn get_passed_proposals(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.passed_proposals().iter() {
            result.push(proposal_id);
        }
        result
    }

    #[view(getLastDescription)]
    fn get_last_description(&self) -> ManagedBuffer {
        self.last_description().get()
    }

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("passedProposals")]
    fn passed_proposals(&self) -> VecMapper<u64>;

    #[storage_mapper("lastDescription")]
    fn last_description(&self) -> SingleValueMapper<ManagedBuffer>;
}
