//! Efficiency-first bidding.
//!
//! Ranks honors by victory points per required vote and bids exactly the
//! requirement on each, in that order, while the pool can afford it.

use std::cmp::Ordering;

use crate::allocate::required_votes;
use crate::council::PlayerCouncilState;
use crate::honors::CouncilHonor;
use crate::resolve::VOTE_EPSILON;
use crate::roster::Roster;

use super::commit;

fn efficiency(victory_points: u32, required: u32) -> f64 {
    if required == 0 {
        0.0
    } else {
        f64::from(victory_points) / f64::from(required)
    }
}

pub fn allocate(
    state: &mut PlayerCouncilState,
    roster: &Roster,
    honors: &[CouncilHonor],
    num_players: u32,
) {
    let required = required_votes(roster, state.id, honors);

    let mut order: Vec<&CouncilHonor> = honors.iter().collect();
    order.sort_by(|a, b| {
        let need_a = required[a.honor_type as usize];
        let need_b = required[b.honor_type as usize];
        let vp_a = a.victory_points(num_players);
        let vp_b = b.victory_points(num_players);
        let eff_a = efficiency(vp_a, need_a);
        let eff_b = efficiency(vp_b, need_b);

        if (eff_a - eff_b).abs() > VOTE_EPSILON {
            return eff_b.total_cmp(&eff_a);
        }
        match vp_b.cmp(&vp_a) {
            Ordering::Equal => a.honor_type.cmp(&b.honor_type),
            other => other,
        }
    });

    let mut available = state.remaining;
    for honor in order {
        let need = required[honor.honor_type as usize];
        if need == 0 {
            continue;
        }
        commit(state, honor.honor_type, need, &mut available);
    }
    state.remaining = available;
}
