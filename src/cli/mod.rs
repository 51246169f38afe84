//! Command-line interface: argument handling, dispatch, and rendering.

pub mod render;
pub mod types;

pub use types::{Cli, OutputFormat};

use std::io::Write as _;

use anyhow::Result;

use crate::domain::error::ConfigError;
use crate::domain::models::{participant_count, BestResult, Roster};
use crate::infrastructure::{load_roster, load_session};
use crate::services::{SearchConfig, Supervisor};

/// Execute the parsed command line: either reformat an existing session or
/// run the search until the process is signalled.
pub async fn run(cli: Cli) -> Result<()> {
    let format = cli.effective_format();

    if let Some(input) = &cli.input {
        let session = load_session(input)?;
        let roster = match &cli.names {
            Some(path) => load_roster(path)?,
            None => Roster::numbered(participant_count(&session)),
        };
        let mut out = render::open_output(cli.output.as_deref())?;
        render::render(&session, &roster, format, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let roster = match (&cli.names, cli.students) {
        (Some(path), _) => load_roster(path)?,
        (None, Some(count)) => Roster::numbered(count),
        (None, None) => return Err(ConfigError::MissingParticipants.into()),
    };
    if roster.len() < 2 {
        return Err(ConfigError::TooFewParticipants(roster.len()).into());
    }
    let rounds = cli.rounds.ok_or(ConfigError::MissingRounds)?;
    if rounds == 0 {
        return Err(ConfigError::ZeroRounds.into());
    }
    let mut out = render::open_output(cli.output.as_deref())?;

    let supervisor = Supervisor::new(SearchConfig {
        participants: roster.len(),
        rounds,
        seed: cli.seed,
    });
    let best = supervisor.run_until_signalled().await?;

    let Some(best) = best else {
        anyhow::bail!("terminated before any round was completed");
    };
    report_best(&best);
    render::render(&best.session, &roster, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Shutdown report on stderr: how far the search got, the pairing grid,
/// the count distribution, and the deviation. Kept off stdout so it never
/// mixes with the rendered session.
fn report_best(best: &BestResult) {
    eprintln!("Best Results: {}", best.rounds_completed);
    eprint!("{}", render::matrix_grid(&best.matrix));
    eprintln!("Distribution:");
    for (count, pairs) in best.matrix.distribution() {
        eprintln!("  {count:>2} => {pairs}");
    }
    eprintln!("Standard Deviation: {:.3}", best.deviation);
}

/// Print a fatal error and exit non-zero. No partial output has been
/// produced when this runs for configuration errors.
pub fn handle_error(err: &anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    std::process::exit(1);
}
