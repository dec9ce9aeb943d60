//! Per-participant vote pools.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use super::suit::{Suit, Track, ALL_TRACKS, SUIT_COUNT, TRACK_COUNT};

/// Vote counts a participant can draw from, one per track.
///
/// Counts are unsigned, so a pool can never go negative at rest. Deductions
/// go through [`TrackResources::debit`], which treats an overdraw as a fatal
/// internal-consistency violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackResources {
    /// Guild standing per suit, indexed by `Suit as usize`.
    #[serde(with = "serde_suits", default)]
    pub suits: [u32; SUIT_COUNT],
    /// Caravan capacity.
    #[serde(default)]
    pub route: u32,
    /// Market share.
    #[serde(default)]
    pub market: u32,
}

impl TrackResources {
    /// Creates a pool from suit counts in canonical order plus route and market.
    pub const fn new(suits: [u32; SUIT_COUNT], route: u32, market: u32) -> Self {
        TrackResources { suits, route, market }
    }

    /// Returns the count for one suit.
    pub const fn suit(&self, suit: Suit) -> u32 {
        self.suits[suit as usize]
    }

    /// Returns the count for any track.
    pub const fn get(&self, track: Track) -> u32 {
        match track {
            Track::Suit(suit) => self.suits[suit as usize],
            Track::Route => self.route,
            Track::Market => self.market,
        }
    }

    /// All six counts in canonical track order.
    pub fn as_tracks(&self) -> [u32; TRACK_COUNT] {
        let mut out = [0; TRACK_COUNT];
        for track in ALL_TRACKS {
            out[track.index()] = self.get(track);
        }
        out
    }

    fn slot_mut(&mut self, track: Track) -> &mut u32 {
        match track {
            Track::Suit(suit) => &mut self.suits[suit as usize],
            Track::Route => &mut self.route,
            Track::Market => &mut self.market,
        }
    }

    /// Removes `amount` votes from a track.
    ///
    /// Panics if the track holds fewer than `amount` votes: allocation
    /// procedures check feasibility before committing, so an overdraw means
    /// the engine itself is broken.
    pub fn debit(&mut self, track: Track, amount: u32) {
        let slot = self.slot_mut(track);
        assert!(
            *slot >= amount,
            "overdraw on {:?}: {} available, {} requested",
            track,
            *slot,
            amount
        );
        *slot -= amount;
    }

    /// Adds `amount` votes to a track, saturating at `u32::MAX`.
    pub fn credit(&mut self, track: Track, amount: u32) {
        let slot = self.slot_mut(track);
        *slot = slot.saturating_add(amount);
    }

    /// Track-by-track sum, or `None` if any track would overflow.
    pub fn checked_add(&self, rhs: &TrackResources) -> Option<TrackResources> {
        let mut out = *self;
        for track in ALL_TRACKS {
            *out.slot_mut(track) = self.get(track).checked_add(rhs.get(track))?;
        }
        Some(out)
    }

    /// Sum of all suit counts, saturating at `u32::MAX`.
    pub fn suit_total(&self) -> u32 {
        self.suits.iter().copied().fold(0, u32::saturating_add)
    }

    /// Sum of every track, saturating at `u32::MAX`.
    pub fn total_votes(&self) -> u32 {
        self.suit_total()
            .saturating_add(self.route)
            .saturating_add(self.market)
    }

    /// Exact sum of every track.
    pub fn total_votes_wide(&self) -> u64 {
        self.as_tracks().iter().map(|&v| u64::from(v)).sum()
    }
}

impl AddAssign for TrackResources {
    fn add_assign(&mut self, rhs: TrackResources) {
        for track in ALL_TRACKS {
            self.credit(track, rhs.get(track));
        }
    }
}

/// Serializes the suit array as a `{"hearts": n, ...}` object.
mod serde_suits {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::tracks::suit::SUIT_COUNT;

    #[derive(Default, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct SuitMap {
        #[serde(default)]
        hearts: u32,
        #[serde(default)]
        diamonds: u32,
        #[serde(default)]
        clubs: u32,
        #[serde(default)]
        spades: u32,
    }

    pub fn serialize<S>(value: &[u32; SUIT_COUNT], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let [hearts, diamonds, clubs, spades] = *value;
        SuitMap { hearts, diamonds, clubs, spades }.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u32; SUIT_COUNT], D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = SuitMap::deserialize(deserializer)?;
        Ok([map.hearts, map.diamonds, map.clubs, map.spades])
    }
}
