//! High Council resolution engine.
//!
//! Exposes the resource model, honor catalog, allocation procedures, bidding
//! strategies and resolver for use by the binaries and integration tests.

pub mod allocate;
pub mod council;
pub mod honors;
pub mod matchup;
pub mod report;
pub mod resolve;
pub mod roster;
pub mod snapshot;
pub mod standings;
pub mod strategy;
pub mod tracks;

pub use council::{resolve_council, CouncilResults, PlayerCouncilState, PlayerSnapshot};
pub use honors::{council_honors, CouncilHonor, HonorType};
pub use roster::PlayerId;
pub use snapshot::{CouncilTable, TableError};
pub use strategy::{StrategyAssignments, VotingProfile};
pub use tracks::{HonorCommitment, Suit, Track, TrackResources};
