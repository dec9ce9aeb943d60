//! Bidding strategies.
//!
//! A strategy decides which honors one participant bids on and how much,
//! spending from that participant's remaining pool. Profiles form a closed
//! set dispatched by `match`; every strategy shares one signature and only
//! sees opponents through the read-only [`Roster`].

pub mod basic;
pub mod chaos;
pub mod maximizer;
pub mod sniper;
pub mod spreader;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::allocate::allocate_honor;
use crate::council::PlayerCouncilState;
use crate::honors::{CouncilHonor, HonorType};
use crate::roster::{PlayerId, Roster};
use crate::tracks::TrackResources;

/// A participant's bidding personality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VotingProfile {
    /// No preference; resolves as [`VotingProfile::Maximizer`] once any
    /// participant at the table has a real profile.
    #[default]
    None,
    /// Best victory points per vote first, bidding the minimum.
    Maximizer,
    /// Overbids on the two richest viable honors.
    Sniper,
    /// Minimum bids on as many honors as possible.
    Spreader,
    /// Seeded random order and spend.
    Chaos,
}

/// Every profile, including `None`, in declaration order.
pub const ALL_PROFILES: [VotingProfile; 5] = [
    VotingProfile::None,
    VotingProfile::Maximizer,
    VotingProfile::Sniper,
    VotingProfile::Spreader,
    VotingProfile::Chaos,
];

/// Profile per participant. Missing entries mean [`VotingProfile::None`].
pub type StrategyAssignments = BTreeMap<PlayerId, VotingProfile>;

/// Error returned when a profile name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown voting profile '{0}' (expected none, maximizer, sniper, spreader or chaos)")]
pub struct ProfileParseError(pub String);

impl VotingProfile {
    /// Lowercase name used on the command line and in table files.
    pub const fn name(self) -> &'static str {
        match self {
            VotingProfile::None => "none",
            VotingProfile::Maximizer => "maximizer",
            VotingProfile::Sniper => "sniper",
            VotingProfile::Spreader => "spreader",
            VotingProfile::Chaos => "chaos",
        }
    }

    /// The profile that actually bids when strategies are in play.
    pub const fn effective(self) -> VotingProfile {
        match self {
            VotingProfile::None => VotingProfile::Maximizer,
            other => other,
        }
    }

    /// Runs this profile's bidding for one participant.
    pub fn allocate(
        self,
        state: &mut PlayerCouncilState,
        roster: &Roster,
        honors: &[CouncilHonor],
        num_players: u32,
    ) {
        match self.effective() {
            VotingProfile::Sniper => sniper::allocate(state, roster, honors, num_players),
            VotingProfile::Spreader => spreader::allocate(state, roster, honors, num_players),
            VotingProfile::Chaos => chaos::allocate(state, roster, honors, num_players),
            VotingProfile::None | VotingProfile::Maximizer => {
                maximizer::allocate(state, roster, honors, num_players)
            }
        }
        debug!(
            "player {} ({}) bid on {:?}, {} votes left",
            state.id,
            self.effective(),
            state.commitments.keys().collect::<Vec<_>>(),
            state.remaining.total_votes()
        );
    }
}

impl fmt::Display for VotingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VotingProfile {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PROFILES
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileParseError(s.to_string()))
    }
}

/// Attempts a bid and records the commitment if it succeeded.
///
/// Returns true when the honor was committed to.
fn commit(
    state: &mut PlayerCouncilState,
    honor_type: HonorType,
    votes: u32,
    available: &mut TrackResources,
) -> bool {
    match allocate_honor(honor_type, votes, available) {
        Some(commitment) => {
            state.commitments.insert(honor_type, commitment);
            true
        }
        None => false,
    }
}

/// Honors sorted by payout, highest first; equal payouts keep catalog order.
fn by_payout_desc(honors: &[CouncilHonor], num_players: u32) -> Vec<&CouncilHonor> {
    let mut order: Vec<&CouncilHonor> = honors.iter().collect();
    order.sort_by_key(|h| std::cmp::Reverse(h.victory_points(num_players)));
    order
}
