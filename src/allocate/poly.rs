//! Multi-source allocation.
//!
//! Cross-guild and combined-track honors must be funded from at least two
//! distinct tracks. The bid is filled greedily: one vote from each of the
//! two richest tracks, then one vote at a time from whichever track has the
//! most left.

use std::cmp::Reverse;

use crate::tracks::{HonorCommitment, Track, TrackResources, TRACK_COUNT};

/// Smallest legal multi-source bid.
pub const POLY_MIN_VOTES: u32 = 2;

/// Commits `max(votes_needed, 2)` votes spread across at least two tracks.
///
/// Ties between equal balances go to the earlier track in canonical order.
pub fn allocate_spread(
    tracks: &[Track],
    votes_needed: u32,
    pool: &mut TrackResources,
) -> Option<HonorCommitment> {
    let need = votes_needed.max(POLY_MIN_VOTES);

    let mut balances: Vec<(Track, u32)> = tracks
        .iter()
        .map(|&t| (t, pool.get(t)))
        .filter(|&(_, v)| v > 0)
        .collect();
    if balances.len() < 2 {
        return None;
    }
    let total: u64 = balances.iter().map(|&(_, v)| u64::from(v)).sum();
    if total < u64::from(need) {
        return None;
    }

    let mut allocated = [0u32; TRACK_COUNT];
    balances.sort_by_key(|&(t, v)| (Reverse(v), t.index()));
    for (track, balance) in balances.iter_mut().take(2) {
        *balance -= 1;
        allocated[track.index()] += 1;
    }

    // Drawing one vote at a time from the richest track cuts every balance
    // above some level down to it, then takes one more from tracks sitting
    // at that level in canonical order.
    let mut left = u64::from(need - POLY_MIN_VOTES);
    let level = fill_level(&balances, left);
    for (track, balance) in balances.iter_mut().filter(|entry| entry.1 > level) {
        let take = *balance - level;
        *balance = level;
        allocated[track.index()] += take;
        left -= u64::from(take);
    }
    balances.sort_by_key(|&(t, _)| t.index());
    for (track, balance) in balances.iter_mut().filter(|entry| entry.1 == level && level > 0) {
        if left == 0 {
            break;
        }
        *balance -= 1;
        allocated[track.index()] += 1;
        left -= 1;
    }
    if left > 0 {
        return None;
    }

    for &(track, _) in &balances {
        pool.debit(track, allocated[track.index()]);
    }
    Some(HonorCommitment::from_tracks(allocated))
}

/// Lowest level every balance can be cut down to while drawing at most
/// `budget` votes in total.
fn fill_level(balances: &[(Track, u32)], budget: u64) -> u32 {
    let drawn = |level: u32| -> u64 {
        balances
            .iter()
            .map(|&(_, v)| u64::from(v.saturating_sub(level)))
            .sum()
    };
    let mut low = 0;
    let mut high = balances.iter().map(|&(_, v)| v).max().unwrap_or(0);
    while low < high {
        let mid = low + (high - low) / 2;
        if drawn(mid) <= budget {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::{Suit, ALL_TRACKS};

    const SUITS: [Track; 4] = [
        Track::Suit(Suit::Hearts),
        Track::Suit(Suit::Diamonds),
        Track::Suit(Suit::Clubs),
        Track::Suit(Suit::Spades),
    ];

    #[test]
    fn single_suit_is_never_enough() {
        let mut pool = TrackResources::new([20, 0, 0, 0], 0, 0);
        assert!(allocate_spread(&SUITS, 2, &mut pool).is_none());
        assert_eq!(pool.suits, [20, 0, 0, 0]);
    }

    #[test]
    fn floor_of_two_votes() {
        let mut pool = TrackResources::new([1, 1, 0, 0], 0, 0);
        let c = allocate_spread(&SUITS, 1, &mut pool).unwrap();
        assert_eq!(c.total_from_tracks(), 2);
        assert_eq!(c.sources_used(), 2);
        assert_eq!(pool.suits, [0, 0, 0, 0]);
    }

    #[test]
    fn greedy_draws_from_richest() {
        let mut pool = TrackResources::new([1, 5, 3, 0], 0, 0);
        let c = allocate_spread(&SUITS, 5, &mut pool).unwrap();
        // Seeds diamonds and clubs; diamonds stays richest, and wins the 2-2 tie.
        assert_eq!(c.suit_votes, [0, 4, 1, 0]);
        assert_eq!(pool.suits, [1, 1, 2, 0]);
    }

    #[test]
    fn balanced_fill_alternates() {
        let mut pool = TrackResources::new([4, 4, 0, 0], 0, 0);
        let c = allocate_spread(&SUITS, 6, &mut pool).unwrap();
        assert_eq!(c.suit_votes, [3, 3, 0, 0]);
    }

    #[test]
    fn insufficient_total_fails() {
        let mut pool = TrackResources::new([2, 2, 0, 0], 0, 0);
        assert!(allocate_spread(&SUITS, 5, &mut pool).is_none());
        assert_eq!(pool.suits, [2, 2, 0, 0]);
    }

    #[test]
    fn tracks_mix_route_and_market() {
        let mut pool = TrackResources::new([0, 0, 0, 0], 3, 2);
        let c = allocate_spread(&ALL_TRACKS, 4, &mut pool).unwrap();
        assert_eq!(c.route_votes, 3);
        assert_eq!(c.market_votes, 1);
        assert_eq!(pool, TrackResources::new([0, 0, 0, 0], 0, 1));
    }

    /// Draws one vote at a time, richest first, lowest index on ties.
    fn one_at_a_time(balances: [u32; 4], need: u32) -> Option<[u32; 4]> {
        let mut left = balances;
        let mut taken = [0u32; 4];
        let mut order: Vec<usize> = (0..4).filter(|&i| left[i] > 0).collect();
        if order.len() < 2 || left.iter().sum::<u32>() < need.max(2) {
            return None;
        }
        order.sort_by_key(|&i| (Reverse(left[i]), i));
        for &i in order.iter().take(2) {
            left[i] -= 1;
            taken[i] += 1;
        }
        for _ in 2..need.max(2) {
            let i = (0..4).min_by_key(|&i| (Reverse(left[i]), i))?;
            left[i] -= 1;
            taken[i] += 1;
        }
        Some(taken)
    }

    #[test]
    fn matches_one_vote_at_a_time() {
        let pools = [[1, 5, 3, 0], [4, 4, 4, 0], [7, 1, 1, 1], [2, 6, 6, 3], [0, 9, 0, 2], [5, 5, 5, 5]];
        for suits in pools {
            let total: u32 = suits.iter().sum();
            for need in 0..=total + 1 {
                let mut pool = TrackResources::new(suits, 0, 0);
                let got = allocate_spread(&SUITS, need, &mut pool).map(|c| c.suit_votes);
                assert_eq!(got, one_at_a_time(suits, need), "pool {:?} need {}", suits, need);
            }
        }
    }

    #[test]
    fn huge_pools_fill_without_overflow() {
        let mut pool = TrackResources::new([u32::MAX, 1, 0, 0], 0, 0);
        let c = allocate_spread(&SUITS, u32::MAX, &mut pool).unwrap();
        assert_eq!(c.suit_votes, [u32::MAX - 1, 1, 0, 0]);
        assert_eq!(pool.suits, [1, 0, 0, 0]);

        let mut pool = TrackResources::new([u32::MAX, u32::MAX, 0, 0], 0, 0);
        let c = allocate_spread(&SUITS, u32::MAX, &mut pool).unwrap();
        assert_eq!(c.suit_votes, [u32::MAX / 2 + 1, u32::MAX / 2, 0, 0]);
    }

    #[test]
    fn suit_honor_ignores_route_and_market() {
        let mut pool = TrackResources::new([3, 0, 0, 0], 9, 9);
        assert!(allocate_spread(&SUITS, 2, &mut pool).is_none());
    }
}
