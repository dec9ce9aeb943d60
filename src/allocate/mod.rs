//! Vote allocation.
//!
//! Turns a required vote count into a concrete commitment for one honor,
//! drawing from a participant's remaining pool. Each honor type names the
//! tracks that may fund it and whether one or several of them must be used.
//! Infeasible bids yield `None` and leave the pool untouched.

pub mod poly;
pub mod single;
pub mod threshold;

use log::trace;

use crate::honors::HonorType;
use crate::tracks::{HonorCommitment, Track, TrackResources, ALL_TRACKS, SUIT_COUNT};

pub use threshold::{required_votes, RequiredVotes};

/// The four suit tracks in canonical order.
const SUIT_TRACKS: [Track; SUIT_COUNT] = [
    ALL_TRACKS[0],
    ALL_TRACKS[1],
    ALL_TRACKS[2],
    ALL_TRACKS[3],
];

/// Tracks that may fund a bid on the given honor, in canonical order.
pub fn funding_tracks(honor_type: HonorType) -> &'static [Track] {
    match honor_type {
        HonorType::MonoSuit | HonorType::PolySuit => &SUIT_TRACKS,
        HonorType::RouteOnly => &[Track::Route],
        HonorType::MarketOnly => &[Track::Market],
        HonorType::MonoTrack | HonorType::PolyTrack => &ALL_TRACKS,
    }
}

/// Commits `votes_needed` votes toward an honor from `pool`.
///
/// On success the committed amounts are deducted from `pool`. On failure
/// `pool` is unchanged.
pub fn allocate_honor(
    honor_type: HonorType,
    votes_needed: u32,
    pool: &mut TrackResources,
) -> Option<HonorCommitment> {
    let tracks = funding_tracks(honor_type);
    let commitment = if honor_type.is_poly() {
        poly::allocate_spread(tracks, votes_needed, pool)
    } else {
        single::allocate_single(tracks, votes_needed, pool)
    };
    trace!(
        "allocate {:?} need={} -> {}",
        honor_type,
        votes_needed,
        match &commitment {
            Some(c) => format!("{} committed", c.total_from_tracks()),
            None => "infeasible".to_string(),
        }
    );
    commitment
}

/// Largest bid `pool` could place on the honor without committing anything.
///
/// Single-source honors report their largest eligible track. Multi-source
/// honors report the sum of all positive eligible tracks, saturating at
/// `u32::MAX`, or 0 when fewer than two of them are positive.
pub fn max_contribution(pool: &TrackResources, honor_type: HonorType) -> u32 {
    let tracks = funding_tracks(honor_type);
    if honor_type.is_poly() {
        let positive: Vec<u32> = tracks.iter().map(|&t| pool.get(t)).filter(|&v| v > 0).collect();
        if positive.len() >= 2 {
            positive.into_iter().fold(0, u32::saturating_add)
        } else {
            0
        }
    } else {
        tracks.iter().map(|&t| pool.get(t)).max().unwrap_or(0)
    }
}
