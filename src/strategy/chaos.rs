//! Seeded random bidding.
//!
//! Shuffles the honors and spends a random amount between the requirement
//! and everything affordable on each. The generator is seeded from the
//! participant id alone, so the same table always produces the same bids
//! regardless of seating or resolution order.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::allocate::{max_contribution, required_votes};
use crate::council::PlayerCouncilState;
use crate::honors::CouncilHonor;
use crate::roster::{PlayerId, Roster};

use super::commit;

/// Multiplier applied to the participant id to derive its seed.
pub const SEED_MULTIPLIER: u64 = 7919;

/// Returns the deterministic generator for a participant.
pub fn rng_for(id: PlayerId) -> SmallRng {
    SmallRng::seed_from_u64(u64::from(id.0).wrapping_mul(SEED_MULTIPLIER))
}

pub fn allocate(
    state: &mut PlayerCouncilState,
    roster: &Roster,
    honors: &[CouncilHonor],
    _num_players: u32,
) {
    let required = required_votes(roster, state.id, honors);
    let mut rng = rng_for(state.id);
    let mut available = state.remaining;

    let mut order: Vec<&CouncilHonor> = honors.iter().collect();
    order.shuffle(&mut rng);

    for honor in order {
        let max_bid = max_contribution(&available, honor.honor_type);
        if max_bid == 0 {
            continue;
        }
        let min_bid = max_bid.min(required[honor.honor_type as usize].max(1));
        let spend = rng.gen_range(min_bid..=max_bid);
        commit(state, honor.honor_type, spend, &mut available);
    }
    state.remaining = available;
}
