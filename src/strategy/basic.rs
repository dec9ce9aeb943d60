//! Non-strategic bidding.
//!
//! Used when nobody at the table has a voting profile: each participant
//! shows its full strength on every honor it can fund at all. Every honor is
//! priced against a fresh copy of the original pool, so bids do not compete
//! for the same votes and `remaining` is left equal to `original`.

use crate::allocate::{allocate_honor, max_contribution};
use crate::council::PlayerCouncilState;
use crate::honors::CouncilHonor;

pub fn allocate(state: &mut PlayerCouncilState, honors: &[CouncilHonor]) {
    for honor in honors {
        let max_bid = max_contribution(&state.original, honor.honor_type);
        if max_bid == 0 {
            continue;
        }
        let mut scratch = state.original;
        if let Some(commitment) = allocate_honor(honor.honor_type, max_bid, &mut scratch) {
            state.commitments.insert(honor.honor_type, commitment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honors::{council_honors, HonorType};
    use crate::roster::PlayerId;
    use crate::tracks::TrackResources;

    #[test]
    fn bids_maximum_everywhere_without_spending() {
        let pool = TrackResources::new([4, 2, 0, 0], 3, 0);
        let mut state = PlayerCouncilState::new(PlayerId(1), "Player 1", pool, 0);
        allocate(&mut state, council_honors());

        assert_eq!(state.commitments[&HonorType::MonoSuit].total_from_tracks(), 4);
        assert_eq!(state.commitments[&HonorType::PolySuit].total_from_tracks(), 6);
        assert_eq!(state.commitments[&HonorType::RouteOnly].total_from_tracks(), 3);
        assert_eq!(state.commitments[&HonorType::MonoTrack].total_from_tracks(), 4);
        assert_eq!(state.commitments[&HonorType::PolyTrack].total_from_tracks(), 9);
        assert!(!state.commitments.contains_key(&HonorType::MarketOnly));
        assert_eq!(state.remaining, pool);
    }
}
