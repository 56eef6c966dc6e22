//! End-to-end ballot scenarios.
//!
//! Mirrors the deployment flow: the deployer becomes chairperson, grants
//! rights to a few accounts and reads the result once voting settles.

use ballot_core::{Address, Ballot, BallotError, ProposalName, VoterStatus};

fn account(n: u8) -> Address {
    Address::from_public_key(&[n; 32])
}

/// Proposal names as passed at deployment (`bytes32` hex).
fn deployment_names() -> Vec<ProposalName> {
    [
        "0x6161616161616161616161616161616161616161616161616161616161616161",
        "0x6262626262626262626262626262626262626262626262626262626262626262",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn test_deployer_is_chairperson() {
    let owner = account(0);
    let ballot = Ballot::new(owner, deployment_names()).unwrap();

    assert_eq!(ballot.chairperson(), owner);
    assert_eq!(ballot.proposal(0).unwrap().name.to_text(), "a".repeat(32));
    assert_eq!(ballot.proposal(1).unwrap().name.to_text(), "b".repeat(32));
}

#[test]
fn test_give_right_to_vote() {
    let owner = account(0);
    let addr1 = account(1);
    let mut ballot = Ballot::new(owner, deployment_names()).unwrap();

    ballot.grant_right(owner, addr1).unwrap();
    assert_eq!(ballot.voter(&addr1).weight, 1);
}

#[test]
fn test_end_to_end() {
    let owner = account(0);
    let addr1 = account(1);
    let mut ballot = Ballot::from_texts(owner, ["Proposal 1", "Proposal 2"]).unwrap();

    ballot.grant_right(owner, addr1).unwrap();
    assert_eq!(ballot.delegate(addr1, addr1), Err(BallotError::SelfDelegation));

    ballot.vote(addr1, 0).unwrap();
    assert_eq!(ballot.proposal(0).unwrap().vote_count, 1);
    assert_eq!(ballot.winning_proposal(), 0);
    assert_eq!(ballot.winner_name(), "Proposal 1");
}

#[test]
fn test_delegation_to_voted_endpoint() {
    let chair = account(0);
    let b = account(1);
    let c = account(2);
    let mut ballot = Ballot::from_texts(chair, ["Proposal 1", "Proposal 2"]).unwrap();

    ballot.grant_right(chair, b).unwrap();
    ballot.grant_right(chair, c).unwrap();

    ballot.vote(b, 1).unwrap();
    assert_eq!(ballot.proposal(1).unwrap().vote_count, 1);

    ballot.delegate(c, b).unwrap();
    assert_eq!(ballot.proposal(1).unwrap().vote_count, 2);
    assert!(ballot.voter(&c).voted);
    assert_eq!(ballot.winner_name(), "Proposal 2");
}

#[test]
fn test_loop_leaves_chain_untouched() {
    let chair = account(0);
    let (a, b, c) = (account(1), account(2), account(3));
    let mut ballot = Ballot::from_texts(chair, ["Yes", "No"]).unwrap();
    for voter in [a, b, c] {
        ballot.grant_right(chair, voter).unwrap();
    }

    ballot.delegate(a, b).unwrap();
    ballot.delegate(b, c).unwrap();
    let before: Vec<_> = [a, b, c].iter().map(|v| ballot.voter(v)).collect();

    assert_eq!(ballot.delegate(c, a), Err(BallotError::DelegationLoop));
    let after: Vec<_> = [a, b, c].iter().map(|v| ballot.voter(v)).collect();
    assert_eq!(before, after);

    // c still decides for the whole chain
    ballot.vote(c, 1).unwrap();
    assert_eq!(ballot.proposal(1).unwrap().vote_count, 3);
}

#[test]
fn test_one_action_per_voter() {
    let chair = account(0);
    let (a, b) = (account(1), account(2));
    let mut ballot = Ballot::from_texts(chair, ["Yes", "No"]).unwrap();
    ballot.grant_right(chair, a).unwrap();
    ballot.grant_right(chair, b).unwrap();

    ballot.delegate(a, b).unwrap();
    assert_eq!(ballot.voter(&a).status(), VoterStatus::Delegated);
    assert_eq!(ballot.vote(a, 0), Err(BallotError::AlreadyVoted));
    assert_eq!(ballot.delegate(a, b), Err(BallotError::AlreadyVoted));

    ballot.vote(b, 0).unwrap();
    assert_eq!(ballot.voter(&b).status(), VoterStatus::Voted);
    assert_eq!(ballot.vote(b, 1), Err(BallotError::AlreadyVoted));
    assert_eq!(ballot.delegate(b, account(3)), Err(BallotError::AlreadyVoted));

    assert_eq!(ballot.tally().counts, vec![2, 0]);
}

#[test]
fn test_only_chairperson_grants() {
    let chair = account(0);
    let mut ballot = Ballot::from_texts(chair, ["Yes", "No"]).unwrap();
    ballot.grant_right(chair, account(1)).unwrap();

    // Holding rights does not make a voter an authority
    assert_eq!(ballot.grant_right(account(1), account(2)), Err(BallotError::Unauthorized));
    assert_eq!(ballot.voter(&account(2)).weight, 0);
}
