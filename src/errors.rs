pub const ERR_ALREADY_INITIALIZED: &str = "Already initialized";
pub const ERR_NOT_INITIALIZED: &str = "Voting ledger not initialized";
pub const ERR_INVALID_LEDGER: &str = "Voting ledger must be a smart contract";
pub const ERR_INELIGIBLE: &str = "Caller is not a member";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_VOTING_CLOSED: &str = "Voting period has ended";
pub const ERR_DUPLICATE_VOTE: &str = "Already voted";
pub const ERR_VOTING_STILL_OPEN: &str = "Voting period has not ended";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient treasury funds";
pub const ERR_INVALID_RECIPIENT: &str = "Invalid recipient";
pub const ERR_INVALID_HOOK: &str = "Execution hook must be a smart contract";
