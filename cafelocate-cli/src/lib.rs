//! Command-line interface for scoring candidate café sites.
//!
//! `cafelocate analyze` reads café, ward, road and amenity snapshots from a
//! data directory, optionally loads a trained forest, and prints the
//! suitability report as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod analyze;
mod error;

pub use error::CliError;

use analyze::{AnalyzeArgs, run_analyze};

pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_CAFE_TYPE: &str = "cafe-type";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_MODEL: &str = "model";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ARG_FALLBACK_DENSITY: &str = "fallback-density";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_LAT: &str = "CAFELOCATE_CMDS_ANALYZE_LAT";
pub(crate) const ENV_LNG: &str = "CAFELOCATE_CMDS_ANALYZE_LNG";
pub(crate) const ENV_CAFE_TYPE: &str = "CAFELOCATE_CMDS_ANALYZE_CAFE_TYPE";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, data files or the
/// analysis itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cafelocate",
    about = "Score candidate café sites against local market data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse one location for a planned café type.
    Analyze(AnalyzeArgs),
}

#[cfg(test)]
mod tests;
