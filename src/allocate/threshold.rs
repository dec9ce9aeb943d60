//! Winning-bid thresholds.
//!
//! A participant must out-bid the strongest bid any single opponent could
//! possibly place, judged from that opponent's original snapshot.

use crate::honors::{CouncilHonor, HONOR_COUNT};
use crate::roster::{PlayerId, Roster};

use super::max_contribution;

/// Required votes per honor, indexed by `HonorType as usize`.
///
/// Honors absent from the catalog passed to [`required_votes`] stay at 0,
/// which strategies treat as "do not bid".
pub type RequiredVotes = [u32; HONOR_COUNT];

/// Computes the minimum winning bid on every honor for `player`.
pub fn required_votes(roster: &Roster, player: PlayerId, honors: &[CouncilHonor]) -> RequiredVotes {
    let mut required = [0; HONOR_COUNT];
    for honor in honors {
        let max_opposition = roster
            .opponents(player)
            .map(|pool| max_contribution(pool, honor.honor_type))
            .max()
            .unwrap_or(0);
        required[honor.honor_type as usize] = max_opposition.saturating_add(1).max(honor.honor_type.min_votes());
    }
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honors::{council_honors, HonorType};
    use crate::tracks::TrackResources;

    fn roster() -> Roster {
        Roster::new(vec![
            (PlayerId(1), TrackResources::new([5, 0, 0, 0], 0, 0)),
            (PlayerId(2), TrackResources::new([3, 1, 0, 0], 2, 0)),
            (PlayerId(3), TrackResources::new([0, 2, 0, 0], 0, 0)),
        ])
    }

    #[test]
    fn one_more_than_best_opponent() {
        let req = required_votes(&roster(), PlayerId(1), council_honors());
        assert_eq!(req[HonorType::MonoSuit as usize], 4);
        assert_eq!(req[HonorType::PolySuit as usize], 5);
        assert_eq!(req[HonorType::RouteOnly as usize], 3);
        assert_eq!(req[HonorType::MarketOnly as usize], 1);
        assert_eq!(req[HonorType::MonoTrack as usize], 4);
        assert_eq!(req[HonorType::PolyTrack as usize], 7);
    }

    #[test]
    fn ignores_own_pool() {
        let req = required_votes(&roster(), PlayerId(2), council_honors());
        assert_eq!(req[HonorType::MonoSuit as usize], 6);
    }

    #[test]
    fn poly_floor_without_opposition() {
        let roster = Roster::new(vec![
            (PlayerId(1), TrackResources::new([4, 4, 0, 0], 0, 0)),
            (PlayerId(2), TrackResources::default()),
        ]);
        let req = required_votes(&roster, PlayerId(1), council_honors());
        assert_eq!(req[HonorType::PolySuit as usize], 2);
        assert_eq!(req[HonorType::PolyTrack as usize], 2);
        assert_eq!(req[HonorType::MonoSuit as usize], 1);
    }

    #[test]
    fn stronger_opponent_never_lowers_threshold() {
        let mut entries = vec![
            (PlayerId(1), TrackResources::new([2, 2, 0, 0], 1, 1)),
            (PlayerId(2), TrackResources::new([1, 0, 0, 0], 0, 0)),
        ];
        let mut previous = required_votes(&Roster::new(entries.clone()), PlayerId(1), council_honors());
        for _ in 0..5 {
            entries[1].1 += TrackResources::new([1, 1, 0, 1], 1, 1);
            let next = required_votes(&Roster::new(entries.clone()), PlayerId(1), council_honors());
            for (a, b) in previous.iter().zip(next.iter()) {
                assert!(b >= a);
            }
            previous = next;
        }
    }

    #[test]
    fn unbeatable_opponent_saturates() {
        let roster = Roster::new(vec![
            (PlayerId(1), TrackResources::new([1, 1, 0, 0], 0, 0)),
            (PlayerId(2), TrackResources::new([u32::MAX, 1, 0, 0], 0, u32::MAX)),
        ]);
        let req = required_votes(&roster, PlayerId(1), council_honors());
        assert_eq!(req[HonorType::MonoSuit as usize], u32::MAX);
        assert_eq!(req[HonorType::PolySuit as usize], u32::MAX);
        assert_eq!(req[HonorType::MarketOnly as usize], u32::MAX);
    }

    #[test]
    fn honors_outside_catalog_stay_zero() {
        let only_route = [*HonorType::RouteOnly.honor()];
        let req = required_votes(&roster(), PlayerId(1), &only_route);
        assert_eq!(req[HonorType::RouteOnly as usize], 3);
        assert_eq!(req[HonorType::MonoSuit as usize], 0);
    }
}
