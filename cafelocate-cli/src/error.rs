//! Error types emitted by the cafelocate CLI.
//!
//! Keep variants small; most helpers return `Result<_, CliError>`.

use std::sync::Arc;

use cafelocate_core::{AnalysisRequestError, PointError, UnknownCafeType};
use cafelocate_scorer::AnalysisError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the cafelocate CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The coordinates are not a valid WGS84 position.
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] PointError),
    /// The café type names no known category.
    #[error(transparent)]
    UnknownCafeType(#[from] UnknownCafeType),
    /// The request failed validation.
    #[error("invalid analysis request: {0}")]
    InvalidRequest(#[from] AnalysisRequestError),
    /// The data directory does not exist.
    #[error("data directory {path:?} does not exist")]
    MissingDataDir {
        /// Configured data directory.
        path: Utf8PathBuf,
    },
    /// A data file could not be inspected.
    #[error("failed to inspect data file {path:?}: {source}")]
    InspectDataFile {
        /// File being inspected.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A data file could not be read.
    #[error("failed to read data file {path:?}: {source}")]
    ReadDataFile {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A data file held malformed JSON.
    #[error("failed to parse data file {path:?}: {source}")]
    ParseDataFile {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The analysis failed.
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report to stdout failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
    /// Writing the report file failed.
    #[error("failed to write report to {path:?}: {source}")]
    WriteReportFile {
        /// Destination file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
