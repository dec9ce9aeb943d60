//! Single-source allocation.
//!
//! Covers the mono-suit, mono-track, route-only and market-only honors: the
//! whole bid comes from the one eligible track holding the most votes.

use crate::tracks::{HonorCommitment, Track, TrackResources};

/// Picks the eligible track with the largest balance.
///
/// Ties go to the earliest track in `tracks`, which callers pass in
/// canonical order.
pub fn best_track(tracks: &[Track], pool: &TrackResources) -> Option<(Track, u32)> {
    let mut best: Option<(Track, u32)> = None;
    for &track in tracks {
        let votes = pool.get(track);
        if best.map_or(true, |(_, v)| votes > v) {
            best = Some((track, votes));
        }
    }
    best
}

/// Commits `max(votes_needed, 1)` votes from the richest eligible track.
pub fn allocate_single(
    tracks: &[Track],
    votes_needed: u32,
    pool: &mut TrackResources,
) -> Option<HonorCommitment> {
    let need = votes_needed.max(1);
    let (track, available) = best_track(tracks, pool)?;
    if available < need {
        return None;
    }
    pool.debit(track, need);
    Some(HonorCommitment::single(track, need))
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
    fn picks_largest_suit() {
        let mut pool = TrackResources::new([2, 6, 1, 0], 0, 0);
        let c = allocate_single(&SUITS, 4, &mut pool).unwrap();
        assert_eq!(c.suit_votes, [0, 4, 0, 0]);
        assert_eq!(pool.suits, [2, 2, 1, 0]);
    }

    #[test]
    fn ties_go_to_canonical_order() {
        let pool = TrackResources::new([0, 3, 0, 3], 3, 3);
        assert_eq!(best_track(&SUITS, &pool), Some((Track::Suit(Suit::Diamonds), 3)));
        assert_eq!(best_track(&ALL_TRACKS, &pool), Some((Track::Suit(Suit::Diamonds), 3)));
    }

    #[test]
    fn later_track_needs_strictly_more() {
        let pool = TrackResources::new([2, 0, 0, 0], 2, 5);
        assert_eq!(best_track(&ALL_TRACKS, &pool), Some((Track::Market, 5)));
    }

    #[test]
    fn fails_when_richest_track_is_short() {
        let mut pool = TrackResources::new([3, 3, 3, 3], 0, 0);
        assert!(allocate_single(&SUITS, 4, &mut pool).is_none());
        assert_eq!(pool.suits, [3, 3, 3, 3]);
    }

    #[test]
    fn zero_request_still_needs_one_vote() {
        let mut empty = TrackResources::default();
        assert!(allocate_single(&ALL_TRACKS, 0, &mut empty).is_none());

        let mut pool = TrackResources::new([0, 0, 0, 0], 1, 0);
        let c = allocate_single(&ALL_TRACKS, 0, &mut pool).unwrap();
        assert_eq!(c.route_votes, 1);
    }
}
