//! Council inputs.
//!
//! Loads council tables from JSON and derives participants' vote pools from
//! their completed contracts.

pub mod contracts;
pub mod table;

pub use contracts::{ContractKind, ContractSummary, VoteBreakdown};
pub use table::{CouncilTable, Participant, TableError, MIN_PARTICIPANTS};
