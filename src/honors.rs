//! Honor catalog.
//!
//! The six council honors, their eligibility category, and their payout by
//! number of participants. The table is fixed; declaration order of
//! [`HonorType`] is the catalog enumeration order used for tie-breaks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of council honors.
pub const HONOR_COUNT: usize = 6;

/// Eligibility category of an honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HonorType {
    /// Funded by a single suit.
    MonoSuit,
    /// Funded jointly by at least two suits.
    PolySuit,
    /// Funded by caravan route votes only.
    RouteOnly,
    /// Funded by market votes only.
    MarketOnly,
    /// Funded by any single track.
    MonoTrack,
    /// Funded jointly by at least two tracks of any kind.
    PolyTrack,
}

/// All honor types in catalog order.
pub const ALL_HONOR_TYPES: [HonorType; HONOR_COUNT] = [
    HonorType::MonoSuit,
    HonorType::PolySuit,
    HonorType::RouteOnly,
    HonorType::MarketOnly,
    HonorType::MonoTrack,
    HonorType::PolyTrack,
];

impl HonorType {
    /// True for honors that must be funded from two or more pools.
    pub const fn is_poly(self) -> bool {
        matches!(self, HonorType::PolySuit | HonorType::PolyTrack)
    }

    /// Smallest bid that can ever be legal for this honor.
    pub const fn min_votes(self) -> u32 {
        if self.is_poly() {
            2
        } else {
            1
        }
    }

    /// Returns the catalog entry for this honor.
    pub fn honor(self) -> &'static CouncilHonor {
        &COUNCIL_HONORS[self as usize]
    }
}

impl fmt::Display for HonorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.honor().name)
    }
}

/// Static definition of one honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CouncilHonor {
    pub honor_type: HonorType,
    pub name: &'static str,
    /// `(participant count, victory points)` pairs in ascending count order.
    pub victory_points_by_player_count: &'static [(u32, u32)],
}

impl CouncilHonor {
    /// Victory points awarded at the given participant count.
    ///
    /// Unlisted counts fall back to the entry for the largest listed count
    /// not above `num_players`; below every listed count the honor is worth 0.
    pub fn victory_points(&self, num_players: u32) -> u32 {
        self.victory_points_by_player_count
            .iter()
            .filter(|(count, _)| *count <= num_players)
            .max_by_key(|(count, _)| *count)
            .map_or(0, |(_, vp)| *vp)
    }
}

/// The council honor table, indexed by `HonorType as usize`.
pub static COUNCIL_HONORS: [CouncilHonor; HONOR_COUNT] = [
    CouncilHonor {
        honor_type: HonorType::MonoSuit,
        name: "Single-Guild Honour (Mono-Suit)",
        victory_points_by_player_count: &[(2, 5), (3, 7), (4, 8)],
    },
    CouncilHonor {
        honor_type: HonorType::PolySuit,
        name: "Cross-Guild Honour (Poly-Suit)",
        victory_points_by_player_count: &[(2, 4), (3, 5), (4, 6)],
    },
    CouncilHonor {
        honor_type: HonorType::RouteOnly,
        name: "Route Honour (Route-only)",
        victory_points_by_player_count: &[(2, 6), (3, 7), (4, 8)],
    },
    CouncilHonor {
        honor_type: HonorType::MarketOnly,
        name: "Market Honour (Market-only)",
        victory_points_by_player_count: &[(2, 4), (3, 5), (4, 6)],
    },
    CouncilHonor {
        honor_type: HonorType::MonoTrack,
        name: "Single-Track Honour (Mono-Ledger)",
        victory_points_by_player_count: &[(2, 5), (3, 6), (4, 7)],
    },
    CouncilHonor {
        honor_type: HonorType::PolyTrack,
        name: "Combined-Track Honour (Poly-Ledger)",
        victory_points_by_player_count: &[(2, 3), (3, 4), (4, 5)],
    },
];

/// Returns the full honor catalog in enumeration order.
pub fn council_honors() -> &'static [CouncilHonor] {
    &COUNCIL_HONORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_type() {
        for (i, honor) in COUNCIL_HONORS.iter().enumerate() {
            assert_eq!(honor.honor_type as usize, i);
            assert_eq!(honor.honor_type, ALL_HONOR_TYPES[i]);
        }
    }

    #[test]
    fn exact_payouts() {
        assert_eq!(HonorType::MonoSuit.honor().victory_points(4), 8);
        assert_eq!(HonorType::PolySuit.honor().victory_points(2), 4);
        assert_eq!(HonorType::RouteOnly.honor().victory_points(3), 7);
        assert_eq!(HonorType::PolyTrack.honor().victory_points(4), 5);
    }

    #[test]
    fn payout_steps_down_to_largest_listed_count() {
        assert_eq!(HonorType::MonoSuit.honor().victory_points(5), 8);
        assert_eq!(HonorType::MonoTrack.honor().victory_points(9), 7);
    }

    #[test]
    fn payout_below_table_is_zero() {
        assert_eq!(HonorType::MonoSuit.honor().victory_points(1), 0);
        assert_eq!(HonorType::MarketOnly.honor().victory_points(0), 0);
    }

    #[test]
    fn poly_floors() {
        assert_eq!(HonorType::PolySuit.min_votes(), 2);
        assert_eq!(HonorType::PolyTrack.min_votes(), 2);
        assert_eq!(HonorType::RouteOnly.min_votes(), 1);
        assert!(!HonorType::MonoTrack.is_poly());
    }
}
