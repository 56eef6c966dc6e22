//! Property tests: granted weight is never lost or counted twice, and a
//! rejected operation never changes the ballot.

use ballot_core::{Address, Ballot};
use proptest::prelude::*;

const PARTICIPANTS: u8 = 8;
const PROPOSALS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    Grant(u8, u8),
    Delegate(u8, u8),
    Vote(u8, usize),
}

/// Participant 0 is the chairperson.
fn participant(n: u8) -> Address {
    let mut addr = [0u8; 20];
    addr[0] = 0xaa;
    addr[19] = n;
    Address::from_bytes(addr)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..PARTICIPANTS, 0..PARTICIPANTS).prop_map(|(c, t)| Op::Grant(c, t)),
        (0..PARTICIPANTS, 0..PARTICIPANTS).prop_map(|(c, t)| Op::Delegate(c, t)),
        // One past the end to exercise InvalidProposal
        (0..PARTICIPANTS, 0..=PROPOSALS).prop_map(|(c, p)| Op::Vote(c, p)),
    ]
}

fn apply(ballot: &mut Ballot, op: &Op) -> bool {
    let result = match *op {
        Op::Grant(c, t) => ballot.grant_right(participant(c), participant(t)),
        Op::Delegate(c, t) => ballot.delegate(participant(c), participant(t)),
        Op::Vote(c, p) => ballot.vote(participant(c), p),
    };
    result.is_ok()
}

proptest! {
    #[test]
    fn weight_is_conserved(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut ballot = Ballot::from_texts(participant(0), ["A", "B", "C"]).unwrap();

        for op in &ops {
            let before = ballot.clone();
            let ok = apply(&mut ballot, op);

            if !ok {
                prop_assert_eq!(&ballot, &before);
            }

            let tally = ballot.tally();
            prop_assert!(tally.is_balanced(), "unbalanced after {:?}: {:?}", op, tally);

            for n in 0..PARTICIPANTS {
                let old = before.voter(&participant(n));
                let new = ballot.voter(&participant(n));
                // Weight never decreases and the latch never resets
                prop_assert!(new.weight >= old.weight);
                prop_assert!(new.voted || !old.voted);
                // Never both a direct vote and a delegation
                prop_assert!(!(new.delegate.is_some() && new.voted_proposal.is_some()));
            }
        }
    }

    #[test]
    fn winner_is_first_maximum(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut ballot = Ballot::from_texts(participant(0), ["A", "B", "C"]).unwrap();
        for op in &ops {
            apply(&mut ballot, op);
        }

        let counts = ballot.tally().counts;
        let max = counts.iter().copied().max().unwrap_or(0);
        let first = counts.iter().position(|&c| c == max).unwrap_or(0);
        prop_assert_eq!(ballot.winning_proposal(), first);
    }
}
