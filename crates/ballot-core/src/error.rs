use ballot_types::TypesError;
use thiserror::Error;

/// Errors returned by ballot operations.
///
/// Every variant is a caller error: the ballot is left untouched and stays
/// usable after any of them. `UnbalancedSnapshot` is only produced when
/// loading a serialized ballot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BallotError {
    #[error("Only the chairperson can give right to vote")]
    Unauthorized,

    #[error("Voter already has the right to vote")]
    AlreadyHasRights,

    #[error("Already voted")]
    AlreadyVoted,

    #[error("Self-delegation is not allowed")]
    SelfDelegation,

    #[error("Found loop in delegation")]
    DelegationLoop,

    #[error("Has no right to vote")]
    NoRightToVote,

    #[error("Invalid proposal index: {0}")]
    InvalidProposal(usize),

    #[error("Ballot needs at least one proposal")]
    NoProposals,

    #[error("Invalid proposal name: {0}")]
    InvalidProposalName(#[from] TypesError),

    #[error("Snapshot weight does not balance: granted {granted}, accounted {accounted}")]
    UnbalancedSnapshot { granted: u64, accounted: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(BallotError::SelfDelegation.to_string().contains("Self-delegation"));
        assert!(BallotError::InvalidProposal(7).to_string().contains('7'));
        let err = BallotError::UnbalancedSnapshot { granted: 3, accounted: 5 };
        assert!(err.to_string().contains("granted 3"));
    }

    #[test]
    fn test_from_types_error() {
        let err: BallotError = TypesError::ProposalNameTooLong { max: 32, actual: 33 }.into();
        assert!(matches!(err, BallotError::InvalidProposalName(_)));
        assert!(err.to_string().contains("33"));
    }
}
