//! Top-honor sniping.
//!
//! Targets at most the two highest-paying honors it can win and bids
//! everything the pool can put toward each, so the bid survives raises.

use crate::allocate::{max_contribution, required_votes};
use crate::council::PlayerCouncilState;
use crate::honors::CouncilHonor;
use crate::roster::Roster;

use super::{by_payout_desc, commit};

/// Number of honors a sniper contests.
const TARGETS: usize = 2;

pub fn allocate(
    state: &mut PlayerCouncilState,
    roster: &Roster,
    honors: &[CouncilHonor],
    num_players: u32,
) {
    let required = required_votes(roster, state.id, honors);
    let mut available = state.remaining;

    let viable: Vec<&CouncilHonor> = by_payout_desc(honors, num_players)
        .into_iter()
        .filter(|h| {
            let need = required[h.honor_type as usize];
            need > 0 && max_contribution(&available, h.honor_type) >= need
        })
        .collect();

    for honor in viable.into_iter().take(TARGETS) {
        let need = required[honor.honor_type as usize];
        let max_bid = max_contribution(&available, honor.honor_type);
        // An earlier target may have drained the shared tracks.
        if max_bid < need {
            continue;
        }
        commit(state, honor.honor_type, max_bid, &mut available);
    }
    state.remaining = available;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honors::{council_honors, HonorType};
    use crate::roster::PlayerId;
    use crate::tracks::TrackResources;

    #[test]
    fn overbids_two_richest_honors() {
        let me = TrackResources::new([6, 0, 0, 0], 4, 3);
        let them = TrackResources::new([2, 0, 0, 0], 1, 1);
        let mut state = PlayerCouncilState::new(PlayerId(1), "Player 1", me, 0);
        let roster = Roster::new(vec![(PlayerId(1), me), (PlayerId(2), them)]);

        allocate(&mut state, &roster, council_honors(), 4);

        // Mono-suit (8) and route (8) are the two richest viable honors.
        assert_eq!(state.commitments.len(), 2);
        assert_eq!(state.commitments[&HonorType::MonoSuit].suit_votes[0], 6);
        assert_eq!(state.commitments[&HonorType::RouteOnly].route_votes, 4);
        assert_eq!(state.remaining, TrackResources::new([0, 0, 0, 0], 0, 3));
    }

    #[test]
    fn skips_target_drained_by_first_bid() {
        // Only hearts: mono-suit takes everything, mono-track has nothing left.
        let me = TrackResources::new([5, 0, 0, 0], 0, 0);
        let them = TrackResources::new([1, 0, 0, 0], 0, 0);
        let mut state = PlayerCouncilState::new(PlayerId(1), "Player 1", me, 0);
        let roster = Roster::new(vec![(PlayerId(1), me), (PlayerId(2), them)]);

        allocate(&mut state, &roster, council_honors(), 4);

        assert_eq!(state.commitments.len(), 1);
        assert_eq!(state.commitments[&HonorType::MonoSuit].total_from_tracks(), 5);
    }

    #[test]
    fn nothing_viable_commits_nothing() {
        let me = TrackResources::new([1, 0, 0, 0], 0, 0);
        let them = TrackResources::new([9, 9, 9, 9], 9, 9);
        let mut state = PlayerCouncilState::new(PlayerId(1), "Player 1", me, 0);
        let roster = Roster::new(vec![(PlayerId(1), me), (PlayerId(2), them)]);

        allocate(&mut state, &roster, council_honors(), 3);
        assert!(state.commitments.is_empty());
        assert_eq!(state.remaining, me);
    }
}
