//! Voter records.
//!
//! Voters move through: Unregistered -> RightGranted -> Voted | Delegated

use ballot_types::Address;
use serde::{Deserialize, Serialize};

/// Where a voter is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoterStatus {
    /// No weight and no action taken
    Unregistered,
    /// Holds weight, has not acted yet
    RightGranted,
    /// Cast a direct vote
    Voted,
    /// Handed its weight to another voter
    Delegated,
}

impl VoterStatus {
    /// Check if the voter can still vote or delegate.
    pub fn can_act(&self) -> bool {
        matches!(self, VoterStatus::Unregistered | VoterStatus::RightGranted)
    }
}

/// Registry entry for one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Own grant plus weight delegated to this voter
    pub weight: u64,
    /// Latch, set once by either vote or delegate
    pub voted: bool,
    /// Target named by this voter when delegating
    pub delegate: Option<Address>,
    /// Proposal index of a direct vote
    pub voted_proposal: Option<usize>,
}

impl Voter {
    /// Current lifecycle status.
    pub fn status(&self) -> VoterStatus {
        match (self.voted, self.delegate, self.weight) {
            (true, Some(_), _) => VoterStatus::Delegated,
            (true, None, _) => VoterStatus::Voted,
            (false, _, 0) => VoterStatus::Unregistered,
            (false, _, _) => VoterStatus::RightGranted,
        }
    }

    /// Weight not yet spent on a proposal or handed on.
    pub fn pending_weight(&self) -> u64 {
        if self.voted {
            0
        } else {
            self.weight
        }
    }
}
