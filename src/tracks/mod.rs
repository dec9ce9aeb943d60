//! Resource model.
//!
//! Contains the vote-source enumerations, the per-participant resource
//! pools, and the per-honor commitment records built from them.

pub mod commitment;
pub mod resources;
pub mod suit;

pub use commitment::HonorCommitment;
pub use resources::TrackResources;
pub use suit::{Suit, Track, ALL_SUITS, ALL_TRACKS, SUIT_COUNT, TRACK_COUNT};
