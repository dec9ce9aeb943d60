//! Profile matchups.
//!
//! Resolves one table under every assignment of voting profiles to its
//! participants and reports how each profile fared. Runs are independent
//! council resolutions, so they are spread across a rayon pool; results come
//! back in run order regardless of thread count.

use std::collections::BTreeMap;
use std::io::Write;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::honors::HonorType;
use crate::roster::PlayerId;
use crate::snapshot::CouncilTable;
use crate::strategy::{StrategyAssignments, VotingProfile};

/// Configuration for a matchup batch.
#[derive(Debug, Clone)]
pub struct MatchupConfig {
    /// Profiles each participant cycles through.
    pub profiles: Vec<VotingProfile>,
    /// Number of worker threads; 1 runs on the calling thread.
    pub threads: usize,
    /// Refuse batches with more runs than this.
    pub max_runs: usize,
    /// Suppress the summary on stderr.
    pub quiet: bool,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        MatchupConfig {
            profiles: vec![
                VotingProfile::Maximizer,
                VotingProfile::Sniper,
                VotingProfile::Spreader,
                VotingProfile::Chaos,
            ],
            threads: 4,
            max_runs: 100_000,
            quiet: false,
        }
    }
}

/// Errors that prevent a batch from starting.
#[derive(Debug, Error)]
pub enum MatchupError {
    #[error("no profiles to match up")]
    NoProfiles,

    #[error("{participants} participants over {profiles} profiles exceeds the limit of {limit} runs")]
    TooManyRuns {
        participants: usize,
        profiles: usize,
        limit: usize,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Outcome of one run.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupRecord {
    pub run_id: usize,
    pub assignments: StrategyAssignments,
    pub honor_points: BTreeMap<PlayerId, f64>,
    /// Winners per honor; unawarded honors map to an empty list.
    pub winners: BTreeMap<HonorType, Vec<PlayerId>>,
}

/// Aggregate results for one profile across every seat it filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProfileStats {
    pub seats: usize,
    pub total_points: f64,
    /// Honors won, counting shared wins.
    pub honors_won: usize,
}

impl ProfileStats {
    pub fn mean_points(&self) -> f64 {
        if self.seats == 0 {
            0.0
        } else {
            self.total_points / self.seats as f64
        }
    }
}

/// Aggregate results of a batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchupSummary {
    pub runs: usize,
    pub by_profile: BTreeMap<VotingProfile, ProfileStats>,
    /// Mean honor points per participant across every run.
    pub mean_by_participant: BTreeMap<PlayerId, f64>,
}

/// Number of runs a batch would take, or `None` on overflow.
pub fn run_count(participants: usize, profiles: usize) -> Option<usize> {
    profiles.checked_pow(u32::try_from(participants).ok()?)
}

/// Profile assignment for run `run_id`, counting in base `profiles.len()`
/// with the first participant as the most significant digit.
pub fn assignment_for(table: &CouncilTable, profiles: &[VotingProfile], run_id: usize) -> StrategyAssignments {
    let base = profiles.len();
    let mut rest = run_id;
    let mut assignments = StrategyAssignments::new();
    for participant in table.participants.iter().rev() {
        assignments.insert(participant.id(), profiles[rest % base]);
        rest /= base;
    }
    assignments
}

/// Resolves the table under every profile assignment.
pub fn run_matchups(table: &CouncilTable, config: &MatchupConfig) -> Result<Vec<MatchupRecord>, MatchupError> {
    if config.profiles.is_empty() {
        return Err(MatchupError::NoProfiles);
    }
    let participants = table.participants.len();
    let runs = run_count(participants, config.profiles.len())
        .filter(|&runs| runs <= config.max_runs)
        .ok_or(MatchupError::TooManyRuns {
            participants,
            profiles: config.profiles.len(),
            limit: config.max_runs,
        })?;

    let play = |run_id: usize| play_run(table, &config.profiles, run_id);
    if config.threads <= 1 {
        return Ok((0..runs).map(play).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.threads).build()?;
    Ok(pool.install(|| (0..runs).into_par_iter().map(play).collect()))
}

fn play_run(table: &CouncilTable, profiles: &[VotingProfile], run_id: usize) -> MatchupRecord {
    let assignments = assignment_for(table, profiles, run_id);
    let results = table.resolve_with(&assignments);
    debug!("run {}: {:?}", run_id, results.honor_points);
    MatchupRecord {
        run_id,
        winners: results
            .outcomes
            .iter()
            .map(|o| (o.honor.honor_type, o.winners.clone()))
            .collect(),
        honor_points: results.honor_points,
        assignments,
    }
}

/// Aggregates a batch by profile and by participant.
pub fn summarize(records: &[MatchupRecord]) -> MatchupSummary {
    let mut summary = MatchupSummary {
        runs: records.len(),
        ..Default::default()
    };
    for record in records {
        for (id, profile) in &record.assignments {
            let points = record.honor_points.get(id).copied().unwrap_or(0.0);
            let stats = summary.by_profile.entry(*profile).or_default();
            stats.seats += 1;
            stats.total_points += points;
            stats.honors_won += record.winners.values().filter(|w| w.contains(id)).count();
            *summary.mean_by_participant.entry(*id).or_insert(0.0) += points;
        }
    }
    if !records.is_empty() {
        for total in summary.mean_by_participant.values_mut() {
            *total /= records.len() as f64;
        }
    }
    summary
}

/// Writes records as JSONL (one JSON object per run, one per line).
pub fn write_jsonl<W: Write>(records: &[MatchupRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a batch summary to stderr.
pub fn print_summary(summary: &MatchupSummary, table: &CouncilTable) {
    eprintln!("=== Matchup Summary ===");
    eprintln!("Runs: {}", summary.runs);
    eprintln!("By profile:");
    for (profile, stats) in &summary.by_profile {
        eprintln!(
            "  {:>9}: {:.2} VP/seat over {} seats, {} honours",
            profile.name(),
            stats.mean_points(),
            stats.seats,
            stats.honors_won
        );
    }
    eprintln!("By participant:");
    for (id, mean) in &summary.mean_by_participant {
        let name = table.participant(*id).map_or("?", |p| p.name());
        eprintln!("  {:>9}: {:.2} VP/run", name, mean);
    }
}
