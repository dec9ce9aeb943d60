//! Council -- resolves the High Council honours for a table of participants.
//!
//! Reads a JSON table from a file or stdin, resolves every honour and prints
//! the council report and final standings to stdout.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use council::report::{render_honor_results, render_standings, render_vote_breakdown};
use council::snapshot::{CouncilTable, TableError};
use council::standings::{standings, ContractScore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve the High Council honours for a table of participants")]
struct Args {
    /// Table file (JSON). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Participant count used for payouts (defaults to the table's)
    #[arg(long)]
    players: Option<u32>,

    /// Assign a voting profile, e.g. `--strategy 2=sniper`. Repeatable.
    #[arg(long = "strategy", value_name = "ID=PROFILE")]
    strategies: Vec<String>,

    /// Ignore every profile and bid the maximum everywhere
    #[arg(long)]
    basic: bool,

    /// Print results as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Also print each participant's vote breakdown
    #[arg(long)]
    breakdown: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("invalid --strategy '{0}', expected ID=PROFILE")]
    StrategyFlag(String),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn load_table(args: &Args) -> Result<CouncilTable, CliError> {
    let mut table = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            CouncilTable::from_reader(BufReader::new(file))?
        }
        None => CouncilTable::from_reader(io::stdin().lock())?,
    };

    if let Some(players) = args.players {
        table.set_num_players(players)?;
    }
    for flag in &args.strategies {
        let (id, profile) = flag
            .split_once('=')
            .ok_or_else(|| CliError::StrategyFlag(flag.clone()))?;
        table.assign_str(id, profile)?;
    }
    if args.basic {
        table.clear_assignments();
    }
    Ok(table)
}

fn run(args: &Args) -> Result<(), CliError> {
    let table = load_table(args)?;
    info!(
        "resolving {} participants at {} players, {} profiles assigned",
        table.participants.len(),
        table.num_players,
        table.assignments.len()
    );
    let results = table.resolve();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
        return Ok(out.flush()?);
    }

    let scores: BTreeMap<_, _> = table
        .participants
        .iter()
        .map(|p| {
            let score = ContractScore {
                points: p.contract_points,
                contracts: p.contracts.len(),
            };
            (p.id(), score)
        })
        .collect();
    let rows = standings(&results, &scores);

    writeln!(out, "{}", render_standings(&rows))?;
    writeln!(out, "{}", render_honor_results(&results, table.num_players))?;
    if args.breakdown {
        let ordered: Vec<_> = rows
            .iter()
            .filter_map(|row| table.participant(row.id))
            .map(|p| p.snapshot.clone())
            .collect();
        writeln!(out, "{}", render_vote_breakdown(&ordered))?;
    }
    Ok(out.flush()?)
}
