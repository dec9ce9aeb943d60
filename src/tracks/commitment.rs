//! Votes pledged by one participant toward one honor.

use serde::{Deserialize, Serialize};

use super::suit::{Track, ALL_TRACKS, SUIT_COUNT, TRACK_COUNT};

/// A participant's pledge toward a single honor.
///
/// An illegal commitment counts as nothing, whatever amounts it carries.
/// The default value is the illegal, empty commitment used for participants
/// that never bid on an honor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HonorCommitment {
    pub suit_votes: [u32; SUIT_COUNT],
    pub route_votes: u32,
    pub market_votes: u32,
    pub wild_votes: u32,
    pub legal: bool,
}

impl HonorCommitment {
    /// Builds a legal commitment from amounts in canonical track order.
    pub fn from_tracks(amounts: [u32; TRACK_COUNT]) -> Self {
        let mut commitment = HonorCommitment { legal: true, ..Default::default() };
        for track in ALL_TRACKS {
            *commitment.slot_mut(track) = amounts[track.index()];
        }
        commitment
    }

    /// Builds a legal commitment drawing everything from one track.
    pub fn single(track: Track, amount: u32) -> Self {
        let mut amounts = [0; TRACK_COUNT];
        amounts[track.index()] = amount;
        Self::from_tracks(amounts)
    }

    fn slot_mut(&mut self, track: Track) -> &mut u32 {
        match track {
            Track::Suit(suit) => &mut self.suit_votes[suit as usize],
            Track::Route => &mut self.route_votes,
            Track::Market => &mut self.market_votes,
        }
    }

    /// Votes drawn from one track.
    pub const fn amount(&self, track: Track) -> u32 {
        match track {
            Track::Suit(suit) => self.suit_votes[suit as usize],
            Track::Route => self.route_votes,
            Track::Market => self.market_votes,
        }
    }

    /// Tracks this commitment draws a positive amount from, in canonical order.
    pub fn tracks_used(&self) -> impl Iterator<Item = Track> + '_ {
        ALL_TRACKS.into_iter().filter(move |&t| self.amount(t) > 0)
    }

    /// Votes drawn from suits, route and market, saturating at `u32::MAX`.
    pub fn total_from_tracks(&self) -> u32 {
        ALL_TRACKS
            .into_iter()
            .map(|t| self.amount(t))
            .fold(0, u32::saturating_add)
    }

    /// Track votes plus wildcard votes, saturating at `u32::MAX`.
    pub fn total_with_wild(&self) -> u32 {
        self.total_from_tracks().saturating_add(self.wild_votes)
    }

    /// Number of distinct tracks contributing a positive amount.
    pub fn sources_used(&self) -> usize {
        self.tracks_used().count()
    }

    /// True if this commitment can contend for its honor.
    pub fn is_contending(&self) -> bool {
        self.legal && self.total_from_tracks() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::suit::Suit;

    #[test]
    fn default_is_illegal_and_empty() {
        let c = HonorCommitment::default();
        assert!(!c.legal);
        assert_eq!(c.total_with_wild(), 0);
        assert!(!c.is_contending());
    }

    #[test]
    fn totals_and_sources() {
        let mut c = HonorCommitment::from_tracks([2, 0, 1, 0, 3, 0]);
        c.wild_votes = 2;
        assert_eq!(c.total_from_tracks(), 6);
        assert_eq!(c.total_with_wild(), 8);
        assert_eq!(c.sources_used(), 3);
        assert_eq!(
            c.tracks_used().collect::<Vec<_>>(),
            vec![Track::Suit(Suit::Hearts), Track::Suit(Suit::Clubs), Track::Route]
        );
    }

    #[test]
    fn wild_only_does_not_contend() {
        let mut c = HonorCommitment { legal: true, ..Default::default() };
        c.wild_votes = 4;
        assert!(!c.is_contending());
    }

    #[test]
    fn totals_saturate() {
        let mut c = HonorCommitment::from_tracks([u32::MAX, 1, 0, 0, 0, 0]);
        assert_eq!(c.total_from_tracks(), u32::MAX);
        c = HonorCommitment::single(Track::Route, u32::MAX - 1);
        c.wild_votes = 5;
        assert_eq!(c.total_with_wild(), u32::MAX);
    }

    #[test]
    fn single_track() {
        let c = HonorCommitment::single(Track::Market, 3);
        assert!(c.legal);
        assert_eq!(c.market_votes, 3);
        assert_eq!(c.sources_used(), 1);
    }
}
