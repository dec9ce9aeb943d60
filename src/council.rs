//! Council resolution entry point.
//!
//! Builds one working state per participant from its snapshot, runs either
//! the basic pass or the assigned bidding strategies, hands out wildcard
//! votes and resolves every honor. Each call owns all of its working state,
//! so independent calls can run on different threads.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::honors::{council_honors, CouncilHonor, HonorType};
use crate::resolve::{assign_wild_votes, resolve_honors, HonorOutcome};
use crate::roster::{PlayerId, Roster};
use crate::strategy::{basic, StrategyAssignments, VotingProfile};
use crate::tracks::{HonorCommitment, TrackResources};

/// What a participant brings to the council.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub resources: TrackResources,
    #[serde(default)]
    pub silk_road_marks: u32,
}

impl PlayerSnapshot {
    pub fn new(id: PlayerId, name: impl Into<String>, resources: TrackResources, silk_road_marks: u32) -> Self {
        PlayerSnapshot {
            id,
            name: name.into(),
            resources,
            silk_road_marks,
        }
    }
}

/// A participant's working state during one resolution.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerCouncilState {
    pub id: PlayerId,
    pub name: String,
    /// Pools as they were when the council opened. Never modified.
    pub original: TrackResources,
    /// Pools still unspent after bidding.
    pub remaining: TrackResources,
    pub silk_road_marks: u32,
    pub commitments: BTreeMap<HonorType, HonorCommitment>,
}

impl PlayerCouncilState {
    /// Creates a state with nothing spent and no commitments.
    pub fn new(id: PlayerId, name: impl Into<String>, original: TrackResources, silk_road_marks: u32) -> Self {
        PlayerCouncilState {
            id,
            name: name.into(),
            original,
            remaining: original,
            silk_road_marks,
            commitments: BTreeMap::new(),
        }
    }

    /// The participant's commitment to an honor, if it made one.
    pub fn commitment(&self, honor_type: HonorType) -> Option<&HonorCommitment> {
        self.commitments.get(&honor_type)
    }
}

impl From<&PlayerSnapshot> for PlayerCouncilState {
    fn from(snapshot: &PlayerSnapshot) -> Self {
        PlayerCouncilState::new(
            snapshot.id,
            snapshot.name.clone(),
            snapshot.resources,
            snapshot.silk_road_marks,
        )
    }
}

/// Everything one resolution produced.
#[derive(Debug, Clone, Serialize)]
pub struct CouncilResults {
    /// Final participant states, in seating order.
    pub states: Vec<PlayerCouncilState>,
    /// Honor points per participant; 0.0 for participants who won nothing.
    pub honor_points: BTreeMap<PlayerId, f64>,
    /// One outcome per honor, in catalog order.
    pub outcomes: Vec<HonorOutcome>,
}

impl CouncilResults {
    /// Honor points for a participant, 0.0 if unknown.
    pub fn points(&self, id: PlayerId) -> f64 {
        self.honor_points.get(&id).copied().unwrap_or(0.0)
    }

    /// Outcome for an honor type.
    pub fn outcome(&self, honor_type: HonorType) -> Option<&HonorOutcome> {
        self.outcomes.iter().find(|o| o.honor.honor_type == honor_type)
    }

    /// Final state of a participant.
    pub fn state(&self, id: PlayerId) -> Option<&PlayerCouncilState> {
        self.states.iter().find(|s| s.id == id)
    }
}

/// Creates fresh working states from snapshots, preserving order.
pub fn build_initial_states(players: &[PlayerSnapshot]) -> Vec<PlayerCouncilState> {
    players.iter().map(PlayerCouncilState::from).collect()
}

/// Resolves the council for the given participants.
///
/// Runs the basic pass when no participant has a profile other than
/// [`VotingProfile::None`]; otherwise everyone bids by profile, with
/// unassigned participants bidding as maximizers.
///
/// Participant ids must be unique. Loaded tables guarantee this.
pub fn resolve_council(
    players: &[PlayerSnapshot],
    num_players: u32,
    assignments: &StrategyAssignments,
) -> CouncilResults {
    debug_assert!(
        players.iter().map(|p| p.id).collect::<BTreeSet<_>>().len() == players.len(),
        "duplicate participant id"
    );
    let strategic = assignments.values().any(|p| *p != VotingProfile::None);
    if strategic {
        calculate_with_strategies(players, num_players, assignments)
    } else {
        calculate_basic(players, num_players)
    }
}

/// Resolves with every participant bidding its maximum on every honor.
pub fn calculate_basic(players: &[PlayerSnapshot], num_players: u32) -> CouncilResults {
    let honors = council_honors();
    let mut states = build_initial_states(players);
    for state in &mut states {
        basic::allocate(state, honors);
    }
    finish(states, honors, num_players)
}

/// Resolves with every participant bidding by its assigned profile.
pub fn calculate_with_strategies(
    players: &[PlayerSnapshot],
    num_players: u32,
    assignments: &StrategyAssignments,
) -> CouncilResults {
    let honors = council_honors();
    let roster = Roster::new(players.iter().map(|p| (p.id, p.resources)).collect());
    let mut states = build_initial_states(players);
    for state in &mut states {
        let profile = assignments.get(&state.id).copied().unwrap_or_default();
        profile.allocate(state, &roster, honors, num_players);
    }
    finish(states, honors, num_players)
}

fn finish(mut states: Vec<PlayerCouncilState>, honors: &[CouncilHonor], num_players: u32) -> CouncilResults {
    for state in &mut states {
        assign_wild_votes(state, honors, num_players);
    }
    let (honor_points, outcomes) = resolve_honors(&states, honors, num_players);
    CouncilResults {
        states,
        honor_points,
        outcomes,
    }
}
