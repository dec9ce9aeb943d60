//! Council table files.
//!
//! A table is a JSON document listing the participants, their pools or
//! contracts, and optional voting profiles:
//!
//! ```json
//! {
//!   "players": 3,
//!   "participants": [
//!     { "id": 1, "name": "Venice", "pools": { "suits": { "hearts": 4 }, "route": 2 } },
//!     { "id": 2, "contracts": [ { "kind": "monopoly", "size": 3 } ], "silk_road_marks": 1 }
//!   ],
//!   "strategies": { "1": "sniper" }
//! }
//! ```
//!
//! Loading validates the table; a [`CouncilTable`] is always resolvable.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::council::{resolve_council, CouncilResults, PlayerSnapshot};
use crate::roster::PlayerId;
use crate::strategy::{ProfileParseError, StrategyAssignments, VotingProfile};
use crate::tracks::TrackResources;

use super::contracts::{ContractSummary, VoteBreakdown};

/// Fewest participants a council can seat.
pub const MIN_PARTICIPANTS: usize = 2;

/// Errors raised while loading a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a council needs at least 2 participants, got {0}")]
    TooFewParticipants(usize),

    #[error("duplicate participant id {0}")]
    DuplicateId(PlayerId),

    #[error("player count {players} is below the {participants} participants at the table")]
    PlayerCountTooSmall { players: u32, participants: usize },

    #[error("strategy given for unknown participant '{0}'")]
    UnknownParticipant(String),

    #[error(transparent)]
    Profile(#[from] ProfileParseError),

    #[error("participant {0} holds more votes than can be counted")]
    VoteOverflow(PlayerId),
}

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    players: Option<u32>,
    participants: Vec<ParticipantEntry>,
    #[serde(default)]
    strategies: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ParticipantEntry {
    id: PlayerId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pools: TrackResources,
    #[serde(default)]
    silk_road_marks: u32,
    #[serde(default)]
    contracts: Vec<ContractSummary>,
    #[serde(default)]
    contract_points: u32,
}

/// One seated participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Effective pools: explicit pools plus votes earned from contracts.
    pub snapshot: PlayerSnapshot,
    pub contracts: Vec<ContractSummary>,
    /// Points already scored from contracts, outside the council.
    pub contract_points: u32,
}

impl Participant {
    pub fn id(&self) -> PlayerId {
        self.snapshot.id
    }

    pub fn name(&self) -> &str {
        &self.snapshot.name
    }

    /// Votes earned from this participant's contracts alone.
    pub fn contract_breakdown(&self) -> VoteBreakdown {
        VoteBreakdown::from_contracts(&self.contracts)
    }
}

/// A validated council table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouncilTable {
    /// Participant count used for payouts.
    pub num_players: u32,
    /// Participants in seating order.
    pub participants: Vec<Participant>,
    pub assignments: StrategyAssignments,
}

impl CouncilTable {
    /// Parses and validates a table from JSON text.
    pub fn from_json(text: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(text)?;
        Self::from_file(file)
    }

    /// Parses and validates a table from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_reader(reader)?;
        Self::from_file(file)
    }

    fn from_file(file: TableFile) -> Result<Self, TableError> {
        let count = file.participants.len();
        if count < MIN_PARTICIPANTS {
            return Err(TableError::TooFewParticipants(count));
        }

        let mut seen = BTreeSet::new();
        for entry in &file.participants {
            if !seen.insert(entry.id) {
                return Err(TableError::DuplicateId(entry.id));
            }
        }

        let num_players = file.players.unwrap_or(count as u32);
        if (num_players as usize) < count {
            return Err(TableError::PlayerCountTooSmall {
                players: num_players,
                participants: count,
            });
        }

        let participants = file
            .participants
            .into_iter()
            .map(Participant::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = CouncilTable {
            num_players,
            participants,
            assignments: StrategyAssignments::new(),
        };
        for (id, profile) in &file.strategies {
            table.assign_str(id, profile)?;
        }
        Ok(table)
    }

    /// Parses `ID=PROFILE` and records the assignment.
    pub fn assign_str(&mut self, id: &str, profile: &str) -> Result<(), TableError> {
        let profile: VotingProfile = profile.parse()?;
        let id = id
            .trim()
            .parse::<u32>()
            .map(PlayerId)
            .map_err(|_| TableError::UnknownParticipant(id.to_string()))?;
        self.assign(id, profile)
    }

    /// Assigns a profile to a seated participant, replacing any previous one.
    pub fn assign(&mut self, id: PlayerId, profile: VotingProfile) -> Result<(), TableError> {
        if self.participant(id).is_none() {
            return Err(TableError::UnknownParticipant(id.to_string()));
        }
        self.assignments.insert(id, profile);
        Ok(())
    }

    /// Overrides the participant count used for payouts.
    pub fn set_num_players(&mut self, players: u32) -> Result<(), TableError> {
        if (players as usize) < self.participants.len() {
            return Err(TableError::PlayerCountTooSmall {
                players,
                participants: self.participants.len(),
            });
        }
        self.num_players = players;
        Ok(())
    }

    /// Drops every assignment, so the table resolves with the basic pass.
    pub fn clear_assignments(&mut self) {
        self.assignments.clear();
    }

    pub fn participant(&self, id: PlayerId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    /// Snapshots of every participant in seating order.
    pub fn snapshots(&self) -> Vec<PlayerSnapshot> {
        self.participants.iter().map(|p| p.snapshot.clone()).collect()
    }

    /// Resolves the council with the table's own assignments.
    pub fn resolve(&self) -> CouncilResults {
        self.resolve_with(&self.assignments)
    }

    /// Resolves the council with other assignments.
    pub fn resolve_with(&self, assignments: &StrategyAssignments) -> CouncilResults {
        resolve_council(&self.snapshots(), self.num_players, assignments)
    }
}

impl TryFrom<ParticipantEntry> for Participant {
    type Error = TableError;

    /// Merges explicit pools with contract votes. Every vote the participant
    /// holds, marks included, must fit in a `u32`.
    fn try_from(entry: ParticipantEntry) -> Result<Self, TableError> {
        let id = entry.id;
        let breakdown = VoteBreakdown::try_from_contracts(&entry.contracts).ok_or(TableError::VoteOverflow(id))?;
        let resources = entry
            .pools
            .checked_add(&breakdown.resources)
            .ok_or(TableError::VoteOverflow(id))?;
        let marks = entry
            .silk_road_marks
            .checked_add(breakdown.silk_road_marks)
            .ok_or(TableError::VoteOverflow(id))?;
        if resources.total_votes_wide() + u64::from(marks) > u64::from(u32::MAX) {
            return Err(TableError::VoteOverflow(id));
        }

        let name = entry
            .name
            .unwrap_or_else(|| format!("Player {}", entry.id));
        Ok(Participant {
            snapshot: PlayerSnapshot::new(entry.id, name, resources, marks),
            contracts: entry.contracts,
            contract_points: entry.contract_points,
        })
    }
}
