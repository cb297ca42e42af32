multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — derived lifecycle state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window active. Members can vote for/against.
    Open,
    /// Deadline reached, for > against. Awaiting execution.
    Passed,
    /// Deadline reached, tie or against >= for. Awaiting execution.
    Failed,
    /// Outcome recorded. Terminal state.
    Executed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub created_at: u64,
    /// Voting closes at this block timestamp (exclusive)
    pub deadline: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    pub executed: bool,
    /// Outcome recorded by executeProposal (false until executed)
    pub passed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_voting_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    /// Strictly positive net vote. A tie is not a pass.
    pub fn is_passing(&self) -> bool {
        self.yes_votes > self.no_votes
    }

    pub fn net_votes(&self) -> BigInt<M> {
        BigInt::from(self.yes_votes.clone()) - BigInt::from(self.no_votes.clone())
    }

    pub fn status(&self, now: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if self.is_voting_open(now) {
            ProposalStatus::Open
        } else if self.is_passing() {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Failed
        }
    }
}

// ============================================================
// Vote Record — audit trail of individual votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

impl VoteDirection {
    pub fn from_choice(in_favor: bool) -> Self {
        if in_favor {
            VoteDirection::For
        } else {
            VoteDirection::Against
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    /// Voter's token balance at the moment of voting
    pub weight: BigUint<M>,
}
