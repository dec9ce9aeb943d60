//! Per-honor winner resolution.
//!
//! Honors are independent: each one looks only at its own commitments, so a
//! participant may win several. The highest legal total (wildcards
//! included) contends; ties are narrowed by utilisation, then focus, then
//! (multi-source honors only) breadth. A breaker applies only when it
//! leaves a smaller, non-empty set. Whoever remains splits the payout.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::council::PlayerCouncilState;
use crate::honors::{CouncilHonor, HonorType};
use crate::roster::PlayerId;
use crate::tracks::HonorCommitment;

use super::metrics::{compute_focus, compute_utilization, VOTE_EPSILON};

/// Note recorded for an honor nobody could contest.
pub const NO_CONTESTANTS: &str = "No eligible contestants.";

/// One step of the tie-break chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TieBreaker {
    /// Share of the used tracks' original capacity that was committed.
    Utilisation,
    /// Share of the participant's whole original capacity that was committed.
    Focus,
    /// Number of distinct tracks funding the bid.
    Breadth,
}

impl TieBreaker {
    /// Breakers that apply to an honor, in order.
    pub fn chain(honor_type: HonorType) -> &'static [TieBreaker] {
        if honor_type.is_poly() {
            &[TieBreaker::Utilisation, TieBreaker::Focus, TieBreaker::Breadth]
        } else {
            &[TieBreaker::Utilisation, TieBreaker::Focus]
        }
    }

    /// Label used in resolution notes.
    pub const fn label(self) -> &'static str {
        match self {
            TieBreaker::Utilisation => "Utilisation (U)",
            TieBreaker::Focus => "Focus (F)",
            TieBreaker::Breadth => "Poly breadth bonus",
        }
    }

    fn metric(self, state: &PlayerCouncilState, commitment: &HonorCommitment) -> f64 {
        match self {
            TieBreaker::Utilisation => compute_utilization(&state.original, commitment),
            TieBreaker::Focus => compute_focus(&state.original, commitment),
            TieBreaker::Breadth => commitment.sources_used() as f64,
        }
    }
}

/// Result of resolving one honor.
#[derive(Debug, Clone, Serialize)]
pub struct HonorOutcome {
    pub honor: CouncilHonor,
    /// Winners in seating order; empty if the honor went unawarded.
    pub winners: Vec<PlayerId>,
    pub vp_per_winner: f64,
    /// Tie-break narrative; empty for an outright win.
    pub resolution_note: String,
    /// Every participant's commitment to this honor, illegal and empty for non-bidders.
    pub commitments_by_player: BTreeMap<PlayerId, HonorCommitment>,
    /// Breakers that narrowed the field, in the order they fired.
    pub tie_breakers: Vec<TieBreaker>,
}

impl HonorOutcome {
    /// True if at least one participant won the honor.
    pub fn is_awarded(&self) -> bool {
        !self.winners.is_empty()
    }
}

/// Resolves every honor and accumulates each participant's honor points.
///
/// Every participant appears in the returned points map, at 0.0 if it won
/// nothing.
pub fn resolve_honors(
    states: &[PlayerCouncilState],
    honors: &[CouncilHonor],
    num_players: u32,
) -> (BTreeMap<PlayerId, f64>, Vec<HonorOutcome>) {
    let mut points: BTreeMap<PlayerId, f64> = states.iter().map(|s| (s.id, 0.0)).collect();
    let mut outcomes = Vec::with_capacity(honors.len());

    for honor in honors {
        let outcome = resolve_honor(states, honor, num_players);
        for winner in &outcome.winners {
            *points.entry(*winner).or_insert(0.0) += outcome.vp_per_winner;
        }
        outcomes.push(outcome);
    }

    (points, outcomes)
}

/// Resolves a single honor.
pub fn resolve_honor(states: &[PlayerCouncilState], honor: &CouncilHonor, num_players: u32) -> HonorOutcome {
    let commitments_by_player: BTreeMap<PlayerId, HonorCommitment> = states
        .iter()
        .map(|s| {
            let commitment = s.commitments.get(&honor.honor_type).copied().unwrap_or_default();
            (s.id, commitment)
        })
        .collect();

    let mut max_votes = 0.0;
    let mut contenders: Vec<&PlayerCouncilState> = Vec::new();
    for state in states {
        let commitment = &commitments_by_player[&state.id];
        if !commitment.is_contending() {
            continue;
        }
        let total = f64::from(commitment.total_with_wild());
        if total > max_votes + VOTE_EPSILON {
            max_votes = total;
            contenders.clear();
            contenders.push(state);
        } else if (total - max_votes).abs() < VOTE_EPSILON {
            contenders.push(state);
        }
    }

    let mut outcome = HonorOutcome {
        honor: *honor,
        winners: Vec::new(),
        vp_per_winner: 0.0,
        resolution_note: String::new(),
        commitments_by_player,
        tie_breakers: Vec::new(),
    };

    if contenders.is_empty() || max_votes <= 0.0 {
        outcome.resolution_note = NO_CONTESTANTS.to_string();
        return outcome;
    }

    let mut winners = contenders;
    for &breaker in TieBreaker::chain(honor.honor_type) {
        if winners.len() <= 1 {
            break;
        }
        if let Some(narrowed) = narrow(breaker, &winners, &outcome.commitments_by_player) {
            winners = narrowed;
            outcome.tie_breakers.push(breaker);
        }
    }

    outcome.resolution_note = resolution_note(&outcome.tie_breakers, winners.len() > 1);
    outcome.vp_per_winner = f64::from(honor.victory_points(num_players)) / winners.len() as f64;
    outcome.winners = winners.iter().map(|s| s.id).collect();

    info!(
        "{}: {:?} with {} votes, {} VP each",
        honor.name, outcome.winners, max_votes, outcome.vp_per_winner
    );
    outcome
}

/// Keeps the candidates with the best metric, or `None` if that would not
/// shrink the set.
fn narrow<'a>(
    breaker: TieBreaker,
    candidates: &[&'a PlayerCouncilState],
    commitments: &BTreeMap<PlayerId, HonorCommitment>,
) -> Option<Vec<&'a PlayerCouncilState>> {
    let mut best = f64::NEG_INFINITY;
    let mut kept: Vec<&PlayerCouncilState> = Vec::new();
    for &candidate in candidates {
        let metric = breaker.metric(candidate, &commitments[&candidate.id]);
        if metric > best + VOTE_EPSILON {
            best = metric;
            kept.clear();
            kept.push(candidate);
        } else if (metric - best).abs() < VOTE_EPSILON {
            kept.push(candidate);
        }
    }
    (!kept.is_empty() && kept.len() < candidates.len()).then_some(kept)
}

fn resolution_note(fired: &[TieBreaker], shared: bool) -> String {
    let mut note = String::new();
    if !fired.is_empty() {
        let labels: Vec<&str> = fired.iter().map(|b| b.label()).collect();
        note = format!("Resolved by {}", labels.join(", then "));
    }
    if shared {
        if note.is_empty() {
            note = "VP shared after tie-breakers.".to_string();
        } else {
            note.push_str("; VP shared.");
        }
    }
    note
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honors::council_honors;
    use crate::tracks::{Track, TrackResources};

    fn player(id: u32, original: TrackResources, bids: &[(HonorType, HonorCommitment)]) -> PlayerCouncilState {
        let mut state = PlayerCouncilState::new(PlayerId(id), format!("Player {}", id), original, 0);
        for (t, c) in bids {
            state.commitments.insert(*t, *c);
        }
        state
    }

    #[test]
    fn outright_winner_takes_all() {
        let states = vec![
            player(1, TrackResources::new([0, 0, 0, 0], 5, 0), &[(HonorType::RouteOnly, HonorCommitment::single(Track::Route, 5))]),
            player(2, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, HonorCommitment::single(Track::Route, 3))]),
        ];
        let outcome = resolve_honor(&states, HonorType::RouteOnly.honor(), 3);
        assert_eq!(outcome.winners, vec![PlayerId(1)]);
        assert_eq!(outcome.vp_per_winner, 7.0);
        assert!(outcome.resolution_note.is_empty());
    }

    #[test]
    fn unawarded_without_bids() {
        let states = vec![player(1, TrackResources::default(), &[]), player(2, TrackResources::default(), &[])];
        let outcome = resolve_honor(&states, HonorType::MarketOnly.honor(), 2);
        assert!(!outcome.is_awarded());
        assert_eq!(outcome.vp_per_winner, 0.0);
        assert_eq!(outcome.resolution_note, NO_CONTESTANTS);
        assert_eq!(outcome.commitments_by_player.len(), 2);
        assert!(!outcome.commitments_by_player[&PlayerId(1)].legal);
    }

    #[test]
    fn illegal_commitment_never_contends() {
        let mut illegal = HonorCommitment::single(Track::Market, 9);
        illegal.legal = false;
        let states = vec![
            player(1, TrackResources::new([0, 0, 0, 0], 0, 9), &[(HonorType::MarketOnly, illegal)]),
            player(2, TrackResources::new([0, 0, 0, 0], 0, 1), &[(HonorType::MarketOnly, HonorCommitment::single(Track::Market, 1))]),
        ];
        let outcome = resolve_honor(&states, HonorType::MarketOnly.honor(), 2);
        assert_eq!(outcome.winners, vec![PlayerId(2)]);
    }

    #[test]
    fn wild_votes_count_toward_total() {
        let mut boosted = HonorCommitment::single(Track::Route, 2);
        boosted.wild_votes = 2;
        let states = vec![
            player(1, TrackResources::new([0, 0, 0, 0], 2, 0), &[(HonorType::RouteOnly, boosted)]),
            player(2, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, HonorCommitment::single(Track::Route, 3))]),
        ];
        let outcome = resolve_honor(&states, HonorType::RouteOnly.honor(), 2);
        assert_eq!(outcome.winners, vec![PlayerId(1)]);
    }

    #[test]
    fn focus_breaks_equal_utilisation() {
        // Both commit 4 of 4 hearts (U = 1); player 2 also holds route votes.
        let bid = HonorCommitment::from_tracks([4, 0, 0, 0, 0, 0]);
        let states = vec![
            player(1, TrackResources::new([4, 0, 0, 0], 0, 0), &[(HonorType::MonoSuit, bid)]),
            player(2, TrackResources::new([4, 0, 0, 0], 4, 0), &[(HonorType::MonoSuit, bid)]),
        ];
        let outcome = resolve_honor(&states, HonorType::MonoSuit.honor(), 2);
        assert_eq!(outcome.winners, vec![PlayerId(1)]);
        assert_eq!(outcome.tie_breakers, vec![TieBreaker::Focus]);
        assert_eq!(outcome.resolution_note, "Resolved by Focus (F)");
    }

    #[test]
    fn breadth_only_for_poly_honors() {
        // Same totals, U = 1 and F = 1 for both; player 2 uses three suits.
        let states = vec![
            player(1, TrackResources::new([3, 3, 0, 0], 0, 0), &[
                (HonorType::PolySuit, HonorCommitment::from_tracks([3, 3, 0, 0, 0, 0])),
            ]),
            player(2, TrackResources::new([2, 2, 2, 0], 0, 0), &[
                (HonorType::PolySuit, HonorCommitment::from_tracks([2, 2, 2, 0, 0, 0])),
            ]),
        ];
        let outcome = resolve_honor(&states, HonorType::PolySuit.honor(), 2);
        assert_eq!(outcome.winners, vec![PlayerId(2)]);
        assert_eq!(outcome.resolution_note, "Resolved by Poly breadth bonus");
    }

    #[test]
    fn chained_breakers_are_all_named() {
        let full = HonorCommitment::from_tracks([4, 0, 0, 0, 0, 0]);
        let states = vec![
            player(1, TrackResources::new([4, 0, 0, 0], 4, 0), &[(HonorType::MonoSuit, full)]),
            player(2, TrackResources::new([4, 0, 0, 0], 0, 0), &[(HonorType::MonoSuit, full)]),
            player(3, TrackResources::new([8, 0, 0, 0], 0, 0), &[(HonorType::MonoSuit, full)]),
        ];
        let outcome = resolve_honor(&states, HonorType::MonoSuit.honor(), 3);
        assert_eq!(outcome.winners, vec![PlayerId(2)]);
        assert_eq!(outcome.tie_breakers, vec![TieBreaker::Utilisation, TieBreaker::Focus]);
        assert_eq!(outcome.resolution_note, "Resolved by Utilisation (U), then Focus (F)");
    }

    #[test]
    fn full_tie_shares_payout() {
        let bid = HonorCommitment::single(Track::Route, 3);
        let states = vec![
            player(1, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, bid)]),
            player(2, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, bid)]),
            player(3, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, bid)]),
        ];
        let (points, outcomes) = resolve_honors(&states, council_honors(), 3);
        let route = &outcomes[HonorType::RouteOnly as usize];
        assert_eq!(route.winners.len(), 3);
        assert_eq!(route.resolution_note, "VP shared after tie-breakers.");
        assert!((route.vp_per_winner * 3.0 - 7.0).abs() < VOTE_EPSILON);
        for id in 1..=3 {
            assert!((points[&PlayerId(id)] - 7.0 / 3.0).abs() < VOTE_EPSILON);
        }
    }

    #[test]
    fn partial_narrowing_then_share() {
        let bid = HonorCommitment::single(Track::Route, 3);
        let states = vec![
            player(1, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, bid)]),
            player(2, TrackResources::new([0, 0, 0, 0], 3, 0), &[(HonorType::RouteOnly, bid)]),
            player(3, TrackResources::new([0, 0, 0, 0], 6, 0), &[(HonorType::RouteOnly, bid)]),
        ];
        let outcome = resolve_honor(&states, HonorType::RouteOnly.honor(), 4);
        assert_eq!(outcome.winners, vec![PlayerId(1), PlayerId(2)]);
        assert_eq!(outcome.resolution_note, "Resolved by Utilisation (U); VP shared.");
        assert_eq!(outcome.vp_per_winner, 4.0);
    }

    #[test]
    fn points_map_lists_everyone() {
        let states = vec![player(1, TrackResources::default(), &[]), player(2, TrackResources::default(), &[])];
        let (points, outcomes) = resolve_honors(&states, council_honors(), 2);
        assert_eq!(points.len(), 2);
        assert!(points.values().all(|&p| p == 0.0));
        assert_eq!(outcomes.len(), 6);
        assert!(outcomes.iter().all(|o| !o.is_awarded()));
    }
}
