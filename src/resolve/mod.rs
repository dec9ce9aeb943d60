//! Honor resolution.
//!
//! Assigns wildcard votes after bidding, then decides each honor's winners
//! from the final commitments and splits its payout among them.

pub mod honors;
pub mod metrics;
pub mod wild;

pub use honors::{resolve_honors, HonorOutcome, TieBreaker};
pub use metrics::{compute_focus, compute_utilization, VOTE_EPSILON};
pub use wild::assign_wild_votes;
