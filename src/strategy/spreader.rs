//! Broad minimum bidding.
//!
//! Walks honors from highest payout down and places the minimum winning bid
//! on each one still affordable, contesting as many honors as possible.

use crate::allocate::required_votes;
use crate::council::PlayerCouncilState;
use crate::honors::CouncilHonor;
use crate::roster::Roster;

use super::{by_payout_desc, commit};

pub fn allocate(
    state: &mut PlayerCouncilState,
    roster: &Roster,
    honors: &[CouncilHonor],
    num_players: u32,
) {
    let required = required_votes(roster, state.id, honors);
    let mut available = state.remaining;

    for honor in by_payout_desc(honors, num_players) {
        let need = required[honor.honor_type as usize];
        if need == 0 {
            continue;
        }
        commit(state, honor.honor_type, need, &mut available);
    }
    state.remaining = available;
}
