#![no_std]

multiversx_sc::imports!();

pub mod balance_ledger_proxy;
pub mod errors;
pub mod execution_hook_proxy;
pub mod token_dao_proxy;
pub mod types;

use errors::*;
use types::{Proposal, ProposalStatus, VoteDirection, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Voting window: 7 days in seconds
pub const VOTING_PERIOD: u64 = 7 * 24 * 60 * 60;

// ============================================================
// Contract
// ============================================================

/// Token-weighted DAO: members (holders of at least `minBalanceForVoting`
/// on the voting ledger) propose and vote; anyone executes after the
/// deadline; members spend from the shared EGLD treasury.
#[multiversx_sc::contract]
pub trait TokenDao {
    // ========================================================
    // Init / Upgrade
    // Voting configuration is set once through `initialize`.
    // ========================================================

    #[init]
    fn init(&self) {
        self.proposal_count().set_if_empty(0u64);
        self.treasury_balance().set_if_empty(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initialize
    // One-time configuration of the voting ledger and threshold.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(&self, voting_ledger: ManagedAddress, min_balance: BigUint) {
        require!(self.voting_ledger().is_empty(), ERR_ALREADY_INITIALIZED);
        require!(
            self.blockchain().is_smart_contract(&voting_ledger),
            ERR_INVALID_LEDGER
        );

        self.voting_ledger().set(&voting_ledger);
        self.min_balance_for_voting().set(&min_balance);

        self.initialized_event(&voting_ledger, &min_balance);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Any member can propose. Ids are sequential from 0.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let proposal_id = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();
        let deadline = now + VOTING_PERIOD;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            created_at: now,
            deadline,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            executed: false,
            passed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, deadline, &proposal.description);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: castVote
    // For/against voting weighted by the live ledger balance.
    // No snapshot: replay protection is per address, so the same
    // tokens can vote again from another address after a transfer.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64, in_favor: bool) {
        let caller = self.blockchain().get_caller();
        let weight = self.voting_power(&caller);
        require!(
            weight >= self.min_balance_for_voting().get(),
            ERR_INELIGIBLE
        );

        let mut proposal = self.require_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_voting_open(now), ERR_VOTING_CLOSED);
        require!(
            !self.voters(proposal_id).contains(&caller),
            ERR_DUPLICATE_VOTE
        );

        self.voters(proposal_id).insert(caller.clone());

        let direction = VoteDirection::from_choice(in_favor);
        match direction {
            VoteDirection::For => proposal.yes_votes += &weight,
            VoteDirection::Against => proposal.no_votes += &weight,
        }

        self.vote_records(proposal_id).push(&VoteRecord {
            voter: caller.clone(),
            direction,
            weight: weight.clone(),
        });
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, &caller, in_favor, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone, after the deadline, exactly once. Records pass/fail;
    // a failed proposal is still terminal.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) -> bool {
        let mut proposal = self.require_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();
        require!(!proposal.is_voting_open(now), ERR_VOTING_STILL_OPEN);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let passed = proposal.is_passing();
        proposal.executed = true;
        proposal.passed = passed;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_executed_event(proposal_id, passed);

        if passed {
            self.dispatch_passed_proposal(&proposal);
        }

        passed
    }

    // ========================================================
    // ENDPOINT: setExecutionHook / clearExecutionHook
    // The hook contract carries out whatever a passed proposal means.
    // ========================================================

    #[endpoint(setExecutionHook)]
    fn set_execution_hook(&self, hook: ManagedAddress) {
        self.blockchain().check_caller_is_owner();
        require!(self.blockchain().is_smart_contract(&hook), ERR_INVALID_HOOK);

        self.execution_hook().set(&hook);
        self.execution_hook_set_event(&hook);
    }

    #[endpoint(clearExecutionHook)]
    fn clear_execution_hook(&self) {
        self.blockchain().check_caller_is_owner();

        self.execution_hook().clear();
        self.execution_hook_cleared_event();
    }

    // ========================================================
    // ENDPOINT: depositFunds
    // Open to anyone, any amount.
    // ========================================================

    #[endpoint(depositFunds)]
    #[payable("EGLD")]
    fn deposit_funds(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        self.treasury_balance().update(|balance| *balance += &payment_amount);
        self.funds_deposited_event(&caller, &payment_amount);

        self.absorb_untracked_funds();
    }

    // ========================================================
    // ENDPOINT: withdrawFunds
    // Members only. Balance is decremented before the transfer; a
    // rejected transfer reverts the whole transaction, decrement included.
    // ========================================================

    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self, amount: BigUint, recipient: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);
        require!(
            !recipient.is_zero() && recipient != self.blockchain().get_sc_address(),
            ERR_INVALID_RECIPIENT
        );

        self.absorb_untracked_funds();

        let balance = self.treasury_balance().get();
        require!(amount <= balance, ERR_INSUFFICIENT_FUNDS);

        self.treasury_balance().set(&balance - &amount);

        if amount > 0u64 {
            self.send().direct_egld(&recipient, &amount);
        }
        self.funds_withdrawn_event(&caller, &recipient, &amount);
    }

    // ========================================================
    // ENDPOINT: syncTreasury
    // Credits EGLD that arrived without depositFunds.
    // ========================================================

    #[endpoint(syncTreasury)]
    fn sync_treasury(&self) -> BigUint {
        self.absorb_untracked_funds()
    }

    // ========================================================
    // INTERNAL: membership
    // Never cached: every privileged call asks the ledger again.
    // ========================================================

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.is_member(address), ERR_INELIGIBLE);
    }

    fn require_proposal(&self, id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    // ========================================================
    // INTERNAL: action dispatch
    // Must run last: the async call ends this transaction's execution.
    // The outcome is already committed, so a failing hook cannot undo it.
    // ========================================================

    fn dispatch_passed_proposal(&self, proposal: &Proposal<Self::Api>) {
        if self.execution_hook().is_empty() {
            return;
        }

        let hook = self.execution_hook().get();
        self.tx()
            .to(&hook)
            .typed(execution_hook_proxy::ExecutionHookProxy)
            .on_proposal_passed(proposal.id, proposal.description.clone())
            .async_call_and_exit();
    }

    // ========================================================
    // INTERNAL: treasury reconciliation
    // ========================================================

    fn absorb_untracked_funds(&self) -> BigUint {
        let untracked = self.get_untracked_balance();
        if untracked > 0u64 {
            self.treasury_balance().update(|balance| *balance += &untracked);
            self.untracked_funds_absorbed_event(&untracked);
        }
        untracked
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.voting_power(address) >= self.min_balance_for_voting().get()
    }

    /// Live balance on the voting ledger. Not snapshotted.
    #[view(getVotingPower)]
    fn voting_power(&self, address: &ManagedAddress) -> BigUint {
        require!(!self.voting_ledger().is_empty(), ERR_NOT_INITIALIZED);
        let ledger = self.voting_ledger().get();
        self.tx()
            .to(&ledger)
            .typed(balance_ledger_proxy::BalanceLedgerProxy)
            .balance_of(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getVotingConfig)]
    fn get_voting_config(&self) -> MultiValue3<ManagedAddress, BigUint, u64> {
        require!(!self.voting_ledger().is_empty(), ERR_NOT_INITIALIZED);
        let ledger = self.voting_ledger().get();
        let min_balance = self.min_balance_for_voting().get();
        (ledger, min_balance, VOTING_PERIOD).into()
    }

    #[view(listDescriptions)]
    fn list_descriptions(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for id in 0..self.proposal_count().get() {
            result.push(self.proposals(id).get().description);
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.require_proposal(id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, id: u64) -> ProposalStatus {
        let proposal = self.require_proposal(id);
        proposal.status(self.blockchain().get_block_timestamp())
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self, proposal_id: u64) -> u64 {
        self.voters(proposal_id).len() as u64
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    /// For minus against.
    #[view(getNetVotes)]
    fn get_net_votes(&self, proposal_id: u64) -> BigInt {
        self.require_proposal(proposal_id).net_votes()
    }

    #[view(getExecutionHook)]
    fn get_execution_hook(&self) -> OptionalValue<ManagedAddress> {
        let mapper = self.execution_hook();
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    #[view(getUntrackedBalance)]
    fn get_untracked_balance(&self) -> BigUint {
        let on_chain = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let tracked = self.treasury_balance().get();
        if on_chain > tracked {
            on_chain - tracked
        } else {
            BigUint::zero()
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initialized")]
    fn initialized_event(
        &self,
        #[indexed] voting_ledger: &ManagedAddress,
        min_balance: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] deadline: u64,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] in_favor: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, #[indexed] passed: bool);

    #[event("executionHookSet")]
    fn execution_hook_set_event(&self, #[indexed] hook: &ManagedAddress);

    #[event("executionHookCleared")]
    fn execution_hook_cleared_event(&self);

    #[event("fundsDeposited")]
    fn funds_deposited_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("untrackedFundsAbsorbed")]
    fn untracked_funds_absorbed_event(&self, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("votingLedger")]
    fn voting_ledger(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("minBalanceForVoting")]
    fn min_balance_for_voting(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("executionHook")]
    fn execution_hook(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    /// Next proposal id; also the number of proposals ever created.
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Votes ──

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;

    // ── Treasury ──

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;
}
