//! Participant identity and the read-only roster of original pools.
//!
//! Participants are referred to by [`PlayerId`] everywhere; the roster is
//! the single table mapping an id to the snapshot it started the council
//! with. Threshold calculations read opponents only through it, so no
//! strategy can observe another participant's in-progress bidding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tracks::TrackResources;

/// Opaque participant identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Original resource snapshots of every participant, in seating order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<(PlayerId, TrackResources)>,
}

impl Roster {
    /// Builds a roster from `(id, original pool)` pairs.
    pub fn new(entries: Vec<(PlayerId, TrackResources)>) -> Self {
        Roster { entries }
    }

    /// Original pools of everyone except `id`.
    pub fn opponents(&self, id: PlayerId) -> impl Iterator<Item = &TrackResources> + '_ {
        self.entries.iter().filter(move |(p, _)| *p != id).map(|(_, r)| r)
    }
}
