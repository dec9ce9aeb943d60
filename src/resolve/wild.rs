//! Wildcard vote assignment.
//!
//! Silk-road marks are not tied to any track. After bidding, all of a
//! participant's marks go to its single most valuable live commitment.

use log::debug;

use crate::council::PlayerCouncilState;
use crate::honors::CouncilHonor;

/// Adds the participant's wildcard votes to its best legal, positive commitment.
///
/// "Best" is the highest payout at `num_players`; ties go to the earlier
/// honor in `honors`. With no eligible commitment the marks are discarded.
pub fn assign_wild_votes(state: &mut PlayerCouncilState, honors: &[CouncilHonor], num_players: u32) {
    if state.silk_road_marks == 0 {
        return;
    }

    let mut best: Option<&CouncilHonor> = None;
    for honor in honors {
        let eligible = state
            .commitments
            .get(&honor.honor_type)
            .is_some_and(|c| c.is_contending());
        if !eligible {
            continue;
        }
        if best.map_or(true, |b| honor.victory_points(num_players) > b.victory_points(num_players)) {
            best = Some(honor);
        }
    }

    match best {
        Some(honor) => {
            if let Some(commitment) = state.commitments.get_mut(&honor.honor_type) {
                commitment.wild_votes = commitment.wild_votes.saturating_add(state.silk_road_marks);
                debug!(
                    "player {}: {} wild votes to {:?}",
                    state.id, state.silk_road_marks, honor.honor_type
                );
            }
        }
        None => debug!(
            "player {}: {} wild votes discarded, no live commitment",
            state.id, state.silk_road_marks
        ),
    }
}
