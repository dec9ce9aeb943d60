//! Plain-text council reports.
//!
//! Renders results exactly as given; nothing here affects resolution.

use crate::council::{CouncilResults, PlayerSnapshot};
use crate::resolve::{compute_focus, compute_utilization, VOTE_EPSILON};
use crate::roster::PlayerId;
use crate::standings::Standing;
use crate::tracks::{HonorCommitment, ALL_SUITS};

/// Formats a score as an integer when it is one, otherwise with one decimal.
pub fn format_score(value: f64) -> String {
    if (value - value.round()).abs() < VOTE_EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Formats a value with a fixed number of decimals.
pub fn format_decimal(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Lists the non-zero sources of a commitment, e.g. `Hearts 3, Routes 2, Market 1`.
pub fn commitment_summary(commitment: &HonorCommitment) -> String {
    let mut parts: Vec<String> = ALL_SUITS
        .iter()
        .filter(|&&suit| commitment.suit_votes[suit as usize] > 0)
        .map(|&suit| format!("{} {}", suit.name(), commitment.suit_votes[suit as usize]))
        .collect();
    if commitment.route_votes > 0 {
        parts.push(format!("Routes {}", commitment.route_votes));
    }
    if commitment.market_votes > 0 {
        parts.push(format!("Market {}", commitment.market_votes));
    }
    if parts.is_empty() {
        "No votes".to_string()
    } else {
        parts.join(", ")
    }
}

/// Renders the honor-by-honor council report.
pub fn render_honor_results(results: &CouncilResults, num_players: u32) -> String {
    let mut lines = vec![String::new(), "=== AUDIENCE WITH THE HIGH COUNCIL ===".to_string()];

    for outcome in &results.outcomes {
        lines.push(String::new());
        lines.push(format!(
            "{} ({} VP):",
            outcome.honor.name,
            outcome.honor.victory_points(num_players)
        ));

        if !outcome.is_awarded() {
            lines.push("  No honour awarded.".to_string());
            continue;
        }

        let names: Vec<&str> = outcome.winners.iter().map(|id| name_of(results, *id)).collect();
        if let [winner] = names.as_slice() {
            lines.push(format!("  Winner: {} ({} VP)", winner, format_score(outcome.vp_per_winner)));
        } else {
            lines.push(format!(
                "  Winners: {} (each receives {} VP)",
                names.join(", "),
                format_score(outcome.vp_per_winner)
            ));
        }

        if !outcome.resolution_note.is_empty() {
            lines.push(format!("  {}", outcome.resolution_note));
        }

        let mut entries: Vec<(u32, &str, &HonorCommitment, f64, f64)> = results
            .states
            .iter()
            .filter_map(|state| {
                let commitment = outcome.commitments_by_player.get(&state.id)?;
                if !commitment.is_contending() {
                    return None;
                }
                Some((
                    commitment.total_with_wild(),
                    state.name.as_str(),
                    commitment,
                    compute_utilization(&state.original, commitment),
                    compute_focus(&state.original, commitment),
                ))
            })
            .collect();
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.0));

        for (votes, name, commitment, utilization, focus) in entries {
            let mut summary = commitment_summary(commitment);
            if commitment.wild_votes > 0 {
                summary.push_str(&format!(", Wild {}", commitment.wild_votes));
            }
            lines.push(format!(
                "  - {}: {} votes ({}; U={}, F={})",
                name,
                votes,
                summary,
                format_decimal(utilization, 2),
                format_decimal(focus, 2)
            ));
        }
    }

    lines.join("\n")
}

/// Renders the final standings and the winner line.
pub fn render_standings(rows: &[Standing]) -> String {
    let mut lines = vec![String::new(), "=== FINAL STANDINGS ===".to_string()];
    for (rank, row) in rows.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!(
            "{}. {} - {} total points (Contracts: {}, Council Honours: {})",
            rank + 1,
            row.name,
            format_score(row.total),
            row.contract.points,
            format_score(row.honor_points)
        ));
    }
    if let Some(winner) = rows.first() {
        lines.push(String::new());
        lines.push(format!(
            "*** WINNER: {} with {} total points! ***",
            winner.name,
            format_score(winner.total)
        ));
    }
    lines.join("\n")
}

/// Renders each participant's vote pools and silk-road marks.
pub fn render_vote_breakdown(players: &[PlayerSnapshot]) -> String {
    let mut lines = vec![String::new(), "=== VOTE BREAKDOWN ===".to_string()];
    for player in players {
        lines.push(String::new());
        lines.push(format!("{}:", player.name));
        lines.push("  Guild Standing Votes by Suit:".to_string());
        for suit in ALL_SUITS {
            lines.push(format!("    {}: {}", suit.name(), player.resources.suit(suit)));
        }
        lines.push(format!("    Total Guild Standing Votes: {}", player.resources.suit_total()));
        lines.push(format!("  Caravan Capacity Votes: {}", player.resources.route));
        lines.push(format!("  Market Share Votes: {}", player.resources.market));
        lines.push(format!(
            "  Silk Road Marks (+1 each qualifying contract): {}",
            player.silk_road_marks
        ));
    }
    lines.join("\n")
}

fn name_of(results: &CouncilResults, id: PlayerId) -> &str {
    results.state(id).map_or("?", |s| s.name.as_str())
}
