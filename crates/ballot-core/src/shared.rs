//! Thread-safe handle to a ballot.
//!
//! Mutations hold the write lock for the whole operation, delegation chain
//! walk included. Queries hold the read lock, so they never see a
//! half-applied mutation.

use std::sync::Arc;
use parking_lot::RwLock;
use ballot_types::{Address, ProposalName};
use crate::ballot::Ballot;
use crate::error::BallotError;
use crate::proposal::Proposal;
use crate::tally::Tally;
use crate::voter::Voter;

/// Shared ballot handle. Clones refer to the same ballot.
#[derive(Debug, Clone)]
pub struct SharedBallot {
    inner: Arc<RwLock<Ballot>>,
}

impl SharedBallot {
    /// Wrap a ballot for shared access.
    pub fn new(ballot: Ballot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ballot)),
        }
    }

    /// Give `target` the right to vote. See [`Ballot::grant_right`].
    pub fn grant_right(&self, caller: Address, target: Address) -> Result<(), BallotError> {
        self.inner.write().grant_right(caller, target)
    }

    /// Delegate the caller's weight. See [`Ballot::delegate`].
    pub fn delegate(&self, caller: Address, target: Address) -> Result<(), BallotError> {
        self.inner.write().delegate(caller, target)
    }

    /// Cast the caller's weight. See [`Ballot::vote`].
    pub fn vote(&self, caller: Address, proposal: usize) -> Result<(), BallotError> {
        self.inner.write().vote(caller, proposal)
    }

    /// Index of the leading proposal.
    pub fn winning_proposal(&self) -> usize {
        self.inner.read().winning_proposal()
    }

    /// Name of the leading proposal.
    pub fn winner_name(&self) -> ProposalName {
        self.inner.read().winner_name()
    }

    /// Copy of a proposal by index.
    pub fn proposal(&self, index: usize) -> Option<Proposal> {
        self.inner.read().proposal(index).cloned()
    }

    /// Get a voter record.
    pub fn voter(&self, address: &Address) -> Voter {
        self.inner.read().voter(address)
    }

    /// Current tally, read under one lock.
    pub fn tally(&self) -> Tally {
        self.inner.read().tally()
    }

    /// Run a read-only closure against a consistent view.
    pub fn with<R>(&self, f: impl FnOnce(&Ballot) -> R) -> R {
        f(&self.inner.read())
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> Ballot {
        self.inner.read().clone()
    }
}

impl From<Ballot> for SharedBallot {
    fn from(ballot: Ballot) -> Self {
        Self::new(ballot)
    }
}
