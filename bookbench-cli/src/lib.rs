//! Command-line interface for the bookbench scoring engine.
//!
//! `bookbench leaderboard` ranks every app in a dataset directory and
//! `bookbench report <APP_ID>` scores a single app. Both print pretty JSON on
//! stdout. Dataset paths are layered from defaults, configuration files,
//! `BOOKBENCH_*` environment variables and CLI flags.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod dataset;
mod error;
mod leaderboard;
mod logging;
mod output;
mod report;

pub use error::CliError;
pub use logging::init_logging;

use leaderboard::{LeaderboardArgs, run_leaderboard};
use report::{ReportArgs, run_report};

pub(crate) const ARG_DATASET_DIR: &str = "dataset-dir";
pub(crate) const ARG_GOLDEN: &str = "golden";
pub(crate) const ARG_RESULTS: &str = "results";
pub(crate) const ARG_QUERIES: &str = "queries";
pub(crate) const ARG_APPS: &str = "apps";
pub(crate) const ARG_APP_ID: &str = "app-id";
pub(crate) const ENV_REPORT_APP_ID: &str = "BOOKBENCH_CMDS_REPORT_APP_ID";

/// Run the bookbench CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or dataset files are
/// unusable, or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Leaderboard(args) => run_leaderboard(args, writer),
        Command::Report(args) => run_report(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bookbench",
    about = "Score book-search apps against curated golden answers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every app in the dataset.
    Leaderboard(LeaderboardArgs),
    /// Report on a single app.
    Report(ReportArgs),
}

#[cfg(test)]
mod tests;
