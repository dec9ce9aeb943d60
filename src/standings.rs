//! Final standings.
//!
//! Adds each participant's honor points to the points it scored from
//! contracts and ranks the table. The first entry is the game winner.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::council::CouncilResults;
use crate::resolve::VOTE_EPSILON;
use crate::roster::PlayerId;

/// Contract scoring carried into the final standings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContractScore {
    pub points: u32,
    /// Number of completed contracts; breaks ties on equal points.
    pub contracts: usize,
}

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub contract: ContractScore,
    pub honor_points: f64,
    pub total: f64,
}

/// Ranks participants by total score.
///
/// Totals are compared at [`VOTE_EPSILON`] resolution; equal totals fall
/// back to contract points, then contract count, then seating order.
/// Participants missing from `scores` count as scoring nothing.
pub fn standings(results: &CouncilResults, scores: &BTreeMap<PlayerId, ContractScore>) -> Vec<Standing> {
    let mut rows: Vec<Standing> = results
        .states
        .iter()
        .map(|state| {
            let contract = scores.get(&state.id).copied().unwrap_or_default();
            let honor_points = results.points(state.id);
            Standing {
                id: state.id,
                name: state.name.clone(),
                contract,
                honor_points,
                total: f64::from(contract.points) + honor_points,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        if (a.total - b.total).abs() > VOTE_EPSILON {
            return b.total.total_cmp(&a.total);
        }
        b.contract
            .points
            .cmp(&a.contract.points)
            .then(b.contract.contracts.cmp(&a.contract.contracts))
    });
    rows
}
