use ballot_core::BallotError;
use ballot_types::TypesError;
use thiserror::Error;

/// Errors raised while turning config and script entries into ballot calls.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HarnessError {
    #[error("Step {step}: no caller given")]
    MissingCaller { step: usize },

    #[error("Step {step}: missing field '{field}'")]
    MissingField { step: usize, field: &'static str },

    #[error("Step {step}: proposal index {value} is negative")]
    NegativeProposal { step: usize, value: i64 },

    #[error("Invalid address for {field}: {source}")]
    InvalidAddress {
        field: String,
        #[source]
        source: TypesError,
    },

    #[error("Invalid proposal name '{name}': {source}")]
    InvalidProposalName {
        name: String,
        #[source]
        source: TypesError,
    },

    #[error("Ballot rejected call: {0}")]
    Ballot(#[from] BallotError),
}
