//! Liquid delegation chains.
//!
//! A voter may hand its weight to another voter, who may in turn have
//! delegated further. Weight always lands at the end of the chain: either a
//! voter that has not acted yet, or one that voted directly.
//!
//! Chains are walked over the registry with an explicit step bound equal to
//! the registry size. A chain longer than that must repeat a voter, so the
//! bound doubles as a loop guard.

use std::collections::{HashMap, HashSet};
use ballot_types::Address;
use crate::error::BallotError;
use crate::voter::Voter;

/// Resolve where `delegator`'s weight ends up when delegating to `target`.
///
/// Follows stored delegations starting at `target` until reaching a voter
/// that has not delegated.
///
/// # Errors
/// - `DelegationLoop` if the chain leads back to `delegator`
/// - `DelegationLoop` if the walk exceeds the registry size
pub fn resolve_chain(
    voters: &HashMap<Address, Voter>,
    delegator: Address,
    target: Address,
) -> Result<Address, BallotError> {
    let mut current = target;

    for _ in 0..=voters.len() {
        let next = match voters.get(&current).and_then(|v| v.delegate) {
            Some(next) => next,
            None => return Ok(current),
        };

        if next == delegator {
            return Err(BallotError::DelegationLoop);
        }
        current = next;
    }

    Err(BallotError::DelegationLoop)
}

/// Final delegate for an address.
///
/// Returns the address itself when it has not delegated. A malformed
/// (cyclic) registry stops the walk at the last voter visited.
pub fn follow_chain(voters: &HashMap<Address, Voter>, address: Address) -> Address {
    let mut current = address;
    let mut visited = HashSet::new();
    visited.insert(current);

    for _ in 0..=voters.len() {
        match voters.get(&current).and_then(|v| v.delegate) {
            Some(next) if !visited.contains(&next) => {
                visited.insert(next);
                current = next;
            }
            _ => break,
        }
    }

    current
}

/// Voters that named `delegate` directly, sorted.
pub fn direct_delegators(voters: &HashMap<Address, Voter>, delegate: &Address) -> Vec<Address> {
    let mut result: Vec<Address> = voters
        .iter()
        .filter(|(_, v)| v.delegate.as_ref() == Some(delegate))
        .map(|(addr, _)| *addr)
        .collect();
    result.sort();
    result
}

/// All voters whose chain passes through `delegate`, sorted.
pub fn all_delegators(voters: &HashMap<Address, Voter>, delegate: &Address) -> Vec<Address> {
    let mut reverse: HashMap<Address, Vec<Address>> = HashMap::new();
    for (addr, voter) in voters {
        if let Some(to) = voter.delegate {
            reverse.entry(to).or_default().push(*addr);
        }
    }

    let mut result = Vec::new();
    let mut to_process = vec![*delegate];
    let mut visited = HashSet::new();
    visited.insert(*delegate);

    while let Some(current) = to_process.pop() {
        for delegator in reverse.get(&current).into_iter().flatten() {
            if visited.insert(*delegator) {
                result.push(*delegator);
                to_process.push(*delegator);
            }
        }
    }

    result.sort();
    result
}
