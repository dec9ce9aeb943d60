//! Suits and tracks.
//!
//! A track is one pool a participant can draw votes from: one of the four
//! guild suits, the caravan route, or the market. The declaration order of
//! both enums is the canonical enumeration order used for every tie-break
//! in allocation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of guild suits.
pub const SUIT_COUNT: usize = 4;

/// Number of distinct vote tracks (four suits, route, market).
pub const TRACK_COUNT: usize = 6;

/// A guild suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// All suits in canonical order.
pub const ALL_SUITS: [Suit; SUIT_COUNT] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

impl Suit {
    /// Returns the display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// Parses a suit from its name or single-letter abbreviation, ignoring case.
    pub fn from_name(s: &str) -> Option<Suit> {
        match s.to_ascii_lowercase().as_str() {
            "hearts" | "h" => Some(Suit::Hearts),
            "diamonds" | "d" => Some(Suit::Diamonds),
            "clubs" | "c" => Some(Suit::Clubs),
            "spades" | "s" => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One vote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Track {
    Suit(Suit),
    Route,
    Market,
}

/// All tracks in canonical order: suits, then route, then market.
pub const ALL_TRACKS: [Track; TRACK_COUNT] = [
    Track::Suit(Suit::Hearts),
    Track::Suit(Suit::Diamonds),
    Track::Suit(Suit::Clubs),
    Track::Suit(Suit::Spades),
    Track::Route,
    Track::Market,
];

impl Track {
    /// Position of this track in `ALL_TRACKS`.
    pub const fn index(self) -> usize {
        match self {
            Track::Suit(suit) => suit as usize,
            Track::Route => SUIT_COUNT,
            Track::Market => SUIT_COUNT + 1,
        }
    }
}
