//! Read-consistent tally reports.

use serde::{Deserialize, Serialize};

/// Snapshot of where all granted weight currently sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Vote count per proposal, in proposal order
    pub counts: Vec<u64>,
    /// Index of the leading proposal
    pub winning_proposal: usize,
    /// Sum of all vote counts
    pub cast_weight: u64,
    /// Weight held by voters that have neither voted nor delegated
    pub pending_weight: u64,
    /// Weight ever granted by the chairperson
    pub total_granted: u64,
}

impl Tally {
    /// Check that no weight was lost or counted twice.
    pub fn is_balanced(&self) -> bool {
        self.cast_weight.checked_add(self.pending_weight) == Some(self.total_granted)
    }

    /// Count of the leading proposal.
    pub fn winning_count(&self) -> u64 {
        self.counts.get(self.winning_proposal).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        let tally = Tally {
            counts: vec![2, 1],
            winning_proposal: 0,
            cast_weight: 3,
            pending_weight: 1,
            total_granted: 4,
        };
        assert!(tally.is_balanced());
        assert_eq!(tally.winning_count(), 2);
    }

    #[test]
    fn test_unbalanced() {
        let tally = Tally {
            counts: vec![2],
            winning_proposal: 0,
            cast_weight: 2,
            pending_weight: 0,
            total_granted: 3,
        };
        assert!(!tally.is_balanced());
    }
}
