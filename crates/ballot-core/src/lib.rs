//! Ballot Core - Weighted single-issue ballot with liquid delegation.
//!
//! This crate provides:
//! - The ballot state machine (grant right, delegate, vote, tally)
//! - Delegation chain resolution with loop detection
//! - A lock-protected handle for concurrent callers

pub mod ballot;
pub mod proposal;
pub mod voter;
pub mod delegation;
pub mod tally;
pub mod shared;
pub mod error;

pub use ballot::Ballot;
pub use proposal::Proposal;
pub use voter::{Voter, VoterStatus};
pub use tally::Tally;
pub use shared::SharedBallot;
pub use error::BallotError;
pub use ballot_types::{Address, ProposalName};
