//! Ballot Harness - Deploys a ballot and drives it from a script.
//!
//! Reads the deployment parameters from a TOML config, replays an optional
//! operation script and logs the resulting tally.

pub mod config;
pub mod error;
pub mod script;
pub mod telemetry;

use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use ballot_core::SharedBallot;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "ballot-harness")]
#[command(about = "Deploys a weighted ballot and replays an operation script")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Operation script to replay
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,

    /// Print the final ballot state as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::HarnessConfig::from_file(&args.config)?;

    let log_level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    telemetry::init_telemetry(log_level, args.json_logs || config.logging.json)?;

    config.validate()?;
    info!("Loaded configuration from {:?}", args.config);

    let ballot = SharedBallot::new(config.build_ballot()?);
    info!(
        "Ballot deployed: chairperson {}, {} proposals",
        ballot.with(|b| b.chairperson()),
        config.proposals.len()
    );

    if let Some(script_path) = &args.script {
        let script = script::Script::from_file(script_path)?;
        let report = script.run(&ballot);
        info!(
            "Script finished: {} applied, {} rejected",
            report.applied,
            report.rejected.len()
        );
    }

    let tally = ballot.tally();
    info!("Vote counts: {:?}", tally.counts);
    info!(
        "Weight cast {}, pending {}, granted {}",
        tally.cast_weight, tally.pending_weight, tally.total_granted
    );
    info!(
        "Winning proposal: #{} {} with {} votes",
        tally.winning_proposal,
        ballot.winner_name(),
        tally.winning_count()
    );
    log_voters(&ballot);

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&ballot.snapshot())?);
    }

    Ok(())
}

/// Log each registry entry and how many voters have yet to act.
fn log_voters(ballot: &SharedBallot) {
    ballot.with(|b| {
        let mut open = 0;
        for (address, voter) in b.voters() {
            let status = voter.status();
            if status.can_act() {
                open += 1;
            }
            debug!("Voter {:x}: {:?}, weight {}", address, status, voter.weight);
        }
        info!("{} of {} registered voters have not acted", open, b.voter_count());
    });
}
