//! GiftMatch host binary.
//!
//! Wires the planes together: roster intake → draw core → report. All
//! user-visible policy lives here — logging, output format, exit
//! codes. The draw core itself never prints, logs results, or exits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use giftmatch_matchcore::draw_with_attempts;
use giftmatch_report::{ReportRow, build_report, save_report};
use giftmatch_roster::{load_participants, load_prior_or_default};
use giftmatch_types::{GiftmatchError, PriorAssignments, Result, constants};

#[derive(Parser, Debug)]
#[command(
    name = "giftmatch",
    version,
    about = "Constrained random gift-exchange matcher"
)]
struct Cli {
    /// Participant CSV (Employee_Name, Employee_EmailID columns).
    #[arg(long, value_name = "FILE")]
    participants: PathBuf,

    /// Prior-cycle assignment CSV; a missing file means no history.
    #[arg(long, value_name = "FILE")]
    previous: Option<PathBuf>,

    /// Where to write the assignment report.
    #[arg(long, value_name = "FILE", default_value = "assignments.csv")]
    output: PathBuf,

    /// Fresh-shuffle attempts before reporting the draw infeasible.
    #[arg(long, default_value_t = constants::DEFAULT_DRAW_ATTEMPTS)]
    attempts: usize,

    /// Seed the RNG for a reproducible draw.
    #[arg(long)]
    seed: Option<u64>,

    /// Output machine-readable JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(rows) => {
            print_success(&cli, &rows);
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_failure(&cli, &err);
            exit_code_for(&err)
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<ReportRow>> {
    let roster = load_participants(&cli.participants)?;
    let prior = match &cli.previous {
        Some(path) => load_prior_or_default(path)?,
        None => PriorAssignments::default(),
    };

    let assignment = match cli.seed {
        Some(seed) => draw_with_attempts(
            &roster,
            &prior,
            cli.attempts,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => draw_with_attempts(&roster, &prior, cli.attempts, &mut rand::thread_rng())?,
    };

    let rows = build_report(&roster, &assignment)?;
    save_report(&cli.output, &rows)?;
    Ok(rows)
}

fn print_success(cli: &Cli, rows: &[ReportRow]) {
    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "data": {
                    "assignments": rows.len(),
                    "output": cli.output,
                }
            })
        );
    } else {
        println!(
            "{} assignment(s) written to {}",
            rows.len(),
            cli.output.display()
        );
    }
}

fn print_failure(cli: &Cli, err: &GiftmatchError) {
    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "ok": false,
                "error": {
                    "code": err.code(),
                    "message": err.to_string(),
                }
            })
        );
    } else {
        tracing::error!(code = err.code(), "{err}");
    }
}

/// Exit-code policy: 2 for inputs the caller must fix, 3 for an
/// exhausted draw (retryable with a larger budget), 1 otherwise.
fn exit_code_for(err: &GiftmatchError) -> ExitCode {
    match err {
        GiftmatchError::EmptyRoster
        | GiftmatchError::RosterTooSmall { .. }
        | GiftmatchError::DuplicateParticipant(_) => ExitCode::from(2),
        GiftmatchError::DrawInfeasible { .. } => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
