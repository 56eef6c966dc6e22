use ballot_types::ProposalName;
use serde::{Deserialize, Serialize};

/// One option on the ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Fixed 32-byte name
    pub name: ProposalName,
    /// Accumulated weight of direct votes and resolved delegations
    pub vote_count: u64,
}

impl Proposal {
    /// Create a proposal with no votes.
    pub fn new(name: ProposalName) -> Self {
        Self { name, vote_count: 0 }
    }
}

/// Index of the proposal with the strictly greatest count.
///
/// A later proposal only takes the lead when its count is strictly greater,
/// so the lowest index wins a tie. An all-zero (or empty) slice yields 0.
pub fn winning_index(proposals: &[Proposal]) -> usize {
    let mut winning = 0;
    let mut best = 0u64;
    for (i, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > best {
            best = proposal.vote_count;
            winning = i;
        }
    }
    winning
}
