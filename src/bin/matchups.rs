//! Profile matchup CLI.
//!
//! Resolves one table under every combination of voting profiles and writes
//! one JSON line per run, with a per-profile summary on stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use council::matchup::{self, MatchupConfig};
use council::snapshot::CouncilTable;
use council::strategy::VotingProfile;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare voting profiles by resolving a table under every assignment")]
struct Args {
    /// Table file (JSON). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Profiles to cycle through, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [
            VotingProfile::Maximizer,
            VotingProfile::Sniper,
            VotingProfile::Spreader,
            VotingProfile::Chaos,
        ]
    )]
    profiles: Vec<VotingProfile>,

    /// Number of parallel threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress summary output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let table = match &args.input {
        Some(path) => CouncilTable::from_reader(BufReader::new(File::open(path)?))?,
        None => CouncilTable::from_reader(io::stdin().lock())?,
    };
    let config = MatchupConfig {
        profiles: args.profiles,
        threads: args.threads,
        quiet: args.quiet,
        ..Default::default()
    };

    if !config.quiet {
        eprintln!(
            "Matchups: {} participants, {} profiles, {} threads",
            table.participants.len(),
            config.profiles.len(),
            config.threads
        );
    }

    let start = Instant::now();
    let records = matchup::run_matchups(&table, &config)?;

    if !config.quiet {
        eprintln!(
            "Completed {} runs in {:.2}s",
            records.len(),
            start.elapsed().as_secs_f64()
        );
        matchup::print_summary(&matchup::summarize(&records), &table);
    }

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            matchup::write_jsonl(&records, &mut writer)?;
            if !config.quiet {
                eprintln!("Wrote {} runs to {}", records.len(), path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            matchup::write_jsonl(&records, &mut writer)?;
        }
    }
    Ok(())
}
