//! The ballot state machine.
//!
//! A ballot is created with a fixed, ordered list of proposals and a
//! chairperson. The chairperson grants voting rights; each voter then either
//! votes directly or delegates its weight exactly once. There is no global
//! phase: the ballot is always open and the tally can be read at any time.
//!
//! Every operation validates all of its preconditions before touching any
//! state, so a rejected call leaves the ballot exactly as it was. Serialized
//! ballots are checked on load and must satisfy the same invariants.

use std::collections::HashMap;
use ballot_types::{Address, ProposalName};
use serde::{Deserialize, Serialize};
use crate::delegation;
use crate::error::BallotError;
use crate::proposal::{winning_index, Proposal};
use crate::tally::Tally;
use crate::voter::Voter;

/// Weighted single-issue ballot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BallotSnapshot")]
pub struct Ballot {
    /// Sole principal allowed to grant rights
    chairperson: Address,
    /// Proposals in announcement order
    proposals: Vec<Proposal>,
    /// Voter registry; absent entries read as the default voter
    voters: HashMap<Address, Voter>,
    /// Weight ever granted by the chairperson
    total_granted: u64,
}

impl Ballot {
    /// Create a new ballot.
    ///
    /// # Errors
    /// Returns `NoProposals` if `proposal_names` is empty.
    pub fn new(chairperson: Address, proposal_names: Vec<ProposalName>) -> Result<Self, BallotError> {
        if proposal_names.is_empty() {
            return Err(BallotError::NoProposals);
        }

        let proposals: Vec<Proposal> = proposal_names.into_iter().map(Proposal::new).collect();
        tracing::debug!(
            "Created ballot with {} proposals, chairperson {}",
            proposals.len(),
            chairperson
        );

        Ok(Self {
            chairperson,
            proposals,
            voters: HashMap::new(),
            total_granted: 0,
        })
    }

    /// Create a ballot from text proposal names.
    pub fn from_texts<I, S>(chairperson: Address, names: I) -> Result<Self, BallotError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| ProposalName::from_text(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(chairperson, names)
    }

    /// Give `target` the right to vote.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the chairperson
    /// - `AlreadyVoted` if `target` already voted or delegated
    /// - `AlreadyHasRights` if `target` already holds weight
    pub fn grant_right(&mut self, caller: Address, target: Address) -> Result<(), BallotError> {
        if caller != self.chairperson {
            return Err(BallotError::Unauthorized);
        }

        let voter = self.voter(&target);
        if voter.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if voter.weight != 0 {
            return Err(BallotError::AlreadyHasRights);
        }

        self.voters.entry(target).or_default().weight = 1;
        self.total_granted += 1;

        tracing::debug!("Granted right to vote to {}", target);
        Ok(())
    }

    /// Delegate the caller's weight to `target`.
    ///
    /// The weight follows the delegation chain starting at `target`. If the
    /// chain ends at a voter that already voted, the weight is added to that
    /// vote's proposal; otherwise it is added to the endpoint's own weight.
    /// The caller's record keeps `target` as named, not the endpoint.
    ///
    /// # Errors
    /// - `AlreadyVoted` if the caller already voted or delegated
    /// - `SelfDelegation` if `target == caller`
    /// - `DelegationLoop` if the chain from `target` leads back to the caller
    /// - `InvalidProposal` if the endpoint's recorded vote is out of range
    pub fn delegate(&mut self, caller: Address, target: Address) -> Result<(), BallotError> {
        let sender = self.voter(&caller);
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if target == caller {
            return Err(BallotError::SelfDelegation);
        }

        let endpoint = delegation::resolve_chain(&self.voters, caller, target)?;
        let weight = sender.weight;

        // Endpoint's proposal is checked before the caller's latch is written
        let counted_for = match self.voter(&endpoint) {
            Voter { voted: true, voted_proposal: Some(index), .. } => {
                let proposal = self
                    .proposals
                    .get_mut(index)
                    .ok_or(BallotError::InvalidProposal(index))?;
                Some((index, proposal))
            }
            _ => None,
        };

        let sender = self.voters.entry(caller).or_default();
        sender.voted = true;
        sender.delegate = Some(target);

        match counted_for {
            Some((index, proposal)) => {
                proposal.vote_count += weight;
                tracing::debug!(
                    "{} delegated {} to {} (resolved {}), counted for proposal {}",
                    caller,
                    weight,
                    target,
                    endpoint,
                    index
                );
            }
            None => {
                self.voters.entry(endpoint).or_default().weight += weight;
                tracing::debug!(
                    "{} delegated {} to {} (resolved {})",
                    caller,
                    weight,
                    target,
                    endpoint
                );
            }
        }

        Ok(())
    }

    /// Cast the caller's full weight for `proposal`.
    ///
    /// # Errors
    /// - `NoRightToVote` if the caller holds no weight
    /// - `AlreadyVoted` if the caller already voted or delegated
    /// - `InvalidProposal` if `proposal` is out of range
    pub fn vote(&mut self, caller: Address, proposal: usize) -> Result<(), BallotError> {
        let voter = self.voter(&caller);
        if voter.weight == 0 {
            return Err(BallotError::NoRightToVote);
        }
        if voter.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if proposal >= self.proposals.len() {
            return Err(BallotError::InvalidProposal(proposal));
        }

        let voter = self.voters.entry(caller).or_default();
        voter.voted = true;
        voter.voted_proposal = Some(proposal);
        self.proposals[proposal].vote_count += voter.weight;

        tracing::debug!("{} voted for proposal {} with weight {}", caller, proposal, voter.weight);
        Ok(())
    }

    /// Index of the leading proposal. Ties go to the lowest index.
    pub fn winning_proposal(&self) -> usize {
        winning_index(&self.proposals)
    }

    /// Name of the leading proposal.
    pub fn winner_name(&self) -> ProposalName {
        self.proposals
            .get(self.winning_proposal())
            .map(|p| p.name)
            .unwrap_or_default()
    }

    /// Get the chairperson.
    pub fn chairperson(&self) -> Address {
        self.chairperson
    }

    /// All proposals in order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Get a proposal by index.
    pub fn proposal(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    /// Get a voter record. Unknown addresses read as the default voter.
    pub fn voter(&self, address: &Address) -> Voter {
        self.voters.get(address).cloned().unwrap_or_default()
    }

    /// Registered voter records.
    pub fn voters(&self) -> impl Iterator<Item = (&Address, &Voter)> {
        self.voters.iter()
    }

    /// Number of registry entries.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Weight ever granted by the chairperson.
    pub fn total_granted(&self) -> u64 {
        self.total_granted
    }

    /// Final delegate for `address` (itself if it has not delegated).
    pub fn resolve_delegate(&self, address: Address) -> Address {
        delegation::follow_chain(&self.voters, address)
    }

    /// Voters that delegated to `address` directly.
    pub fn delegators(&self, address: &Address) -> Vec<Address> {
        delegation::direct_delegators(&self.voters, address)
    }

    /// Voters whose delegation chain passes through `address`.
    pub fn all_delegators(&self, address: &Address) -> Vec<Address> {
        delegation::all_delegators(&self.voters, address)
    }

    /// Current tally.
    pub fn tally(&self) -> Tally {
        let counts: Vec<u64> = self.proposals.iter().map(|p| p.vote_count).collect();
        let cast_weight = counts.iter().sum();
        let pending_weight = self.voters.values().map(Voter::pending_weight).sum();

        Tally {
            counts,
            winning_proposal: self.winning_proposal(),
            cast_weight,
            pending_weight,
            total_granted: self.total_granted,
        }
    }
}

/// Serialized form of a [`Ballot`], validated before it becomes one.
#[derive(Deserialize)]
struct BallotSnapshot {
    chairperson: Address,
    proposals: Vec<Proposal>,
    voters: HashMap<Address, Voter>,
    total_granted: u64,
}

impl TryFrom<BallotSnapshot> for Ballot {
    type Error = BallotError;

    fn try_from(snapshot: BallotSnapshot) -> Result<Self, Self::Error> {
        if snapshot.proposals.is_empty() {
            return Err(BallotError::NoProposals);
        }

        let len = snapshot.proposals.len();
        if let Some(index) = snapshot
            .voters
            .values()
            .filter_map(|v| v.voted_proposal)
            .find(|&index| index >= len)
        {
            return Err(BallotError::InvalidProposal(index));
        }

        let accounted = snapshot
            .proposals
            .iter()
            .map(|p| p.vote_count)
            .chain(snapshot.voters.values().map(Voter::pending_weight))
            .try_fold(0u64, u64::checked_add);
        if accounted != Some(snapshot.total_granted) {
            return Err(BallotError::UnbalancedSnapshot {
                granted: snapshot.total_granted,
                accounted: accounted.unwrap_or(u64::MAX),
            });
        }

        Ok(Self {
            chairperson: snapshot.chairperson,
            proposals: snapshot.proposals,
            voters: snapshot.voters,
            total_granted: snapshot.total_granted,
        })
    }
}
