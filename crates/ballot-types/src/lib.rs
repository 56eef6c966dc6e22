//! Ballot Types - Value types shared by the ballot crates.
//!
//! This crate provides:
//! - Addresses (20-byte principals, Bech32m encoded)
//! - Proposal names (fixed 32-byte names, zero right-padded)

pub mod address;
pub mod proposal_name;
pub mod error;

#[cfg(feature = "serde")]
mod serialization;

pub use address::Address;
pub use proposal_name::ProposalName;
pub use error::TypesError;
