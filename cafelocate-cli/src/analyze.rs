//! Analyze command implementation for the cafelocate CLI.

use std::io::{self, Write};
use std::sync::Arc;

use cafelocate_core::{BoundingBox, CafeType, Point, RequestBounds, Snapshot, Ward};
use cafelocate_predictor::{ClassifierHandle, ForestLoader, PredictionAdapter};
use cafelocate_scorer::{ScoringConfig, SiteAnalyzer, SuitabilityReport};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CAFE_TYPE, ARG_DATA_DIR, ARG_FALLBACK_DENSITY, ARG_LAT, ARG_LNG, ARG_MODEL, ARG_OUTPUT,
    ARG_RADIUS, ARG_TOP_N, CliError, ENV_CAFE_TYPE, ENV_LAT, ENV_LNG,
};

pub(crate) const CAFES_FILE: &str = "cafes.json";
pub(crate) const WARDS_FILE: &str = "wards.json";
pub(crate) const ROADS_FILE: &str = "roads.json";
pub(crate) const AMENITIES_FILE: &str = "amenities.json";
pub(crate) const MODEL_FILE: &str = "cafe_type_forest.json";

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a pinned location for a planned café type. Snapshots \
                 are read from cafes.json, wards.json, roads.json and \
                 amenities.json in the data directory; missing files count \
                 as empty collections. A trained forest is used when present, \
                 otherwise the rule table predicts the café type.",
    about = "Analyse a candidate café site"
)]
#[ortho_config(prefix = "CAFELOCATE")]
pub(crate) struct AnalyzeArgs {
    /// Latitude of the candidate site in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the candidate site in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Café type to plan for: coffee_shop, bakery, dessert_shop or restaurant.
    #[arg(long = ARG_CAFE_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) cafe_type: Option<String>,
    /// Search radius in metres (default 500).
    #[arg(long = ARG_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius: Option<u32>,
    /// Directory holding the snapshot JSON files.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the forest artefact path (`cafe_type_forest.json`).
    #[arg(long = ARG_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) model: Option<Utf8PathBuf>,
    /// Number of cafés in the ranked list.
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Density assumed when no ward contains the site.
    #[arg(long = ARG_FALLBACK_DENSITY, value_name = "people/km²")]
    #[serde(default)]
    pub(crate) fallback_density: Option<f64>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    pub(crate) fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

/// Resolved `analyze` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalyzeConfig {
    /// Site to analyse.
    pub(crate) location: Point,
    /// Planned café type.
    pub(crate) cafe_type: CafeType,
    /// Requested radius; the request applies the default when unset.
    pub(crate) radius_meters: Option<u32>,
    /// Directory holding the snapshot files.
    pub(crate) data_dir: Utf8PathBuf,
    /// Forest artefact path.
    pub(crate) model: Utf8PathBuf,
    /// Scoring configuration with CLI overrides applied.
    pub(crate) scoring: ScoringConfig,
    /// Report destination; stdout when unset.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_LNG,
        })?;
        let raw_type = args.cafe_type.ok_or(CliError::MissingArgument {
            field: ARG_CAFE_TYPE,
            env: ENV_CAFE_TYPE,
        })?;
        let location = Point::new(lat, lng)?;
        let cafe_type = raw_type.parse::<CafeType>()?;

        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let model = args.model.unwrap_or_else(|| data_dir.join(MODEL_FILE));

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            top_n: args.top_n.unwrap_or(defaults.top_n),
            fallback_population_density: args
                .fallback_density
                .unwrap_or(defaults.fallback_population_density),
            request_bounds: RequestBounds {
                service_area: Some(BoundingBox::KATHMANDU),
                ..defaults.request_bounds
            },
            ..defaults
        };

        Ok(Self {
            location,
            cafe_type,
            radius_meters: args.radius,
            data_dir,
            model,
            scoring,
            output: args.output,
        })
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_analyze_with(args, &mut stdout)
}

pub(crate) fn run_analyze_with(args: AnalyzeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_analyze(&config)?;
    write_report(writer, config.output.as_deref(), &report)
}

fn execute_analyze(config: &AnalyzeConfig) -> Result<SuitabilityReport, CliError> {
    let handle = ClassifierHandle::new(ForestLoader::new(config.model.clone()));
    let analyzer = SiteAnalyzer::new(config.scoring, PredictionAdapter::new(Arc::new(handle)));
    let request = analyzer.request(config.location, config.cafe_type, config.radius_meters)?;
    let snapshot = load_snapshot(&config.data_dir)?;
    Ok(analyzer.analyze(&request, &snapshot)?)
}

/// Load every snapshot collection from `data_dir`.
pub(crate) fn load_snapshot(data_dir: &Utf8Path) -> Result<Snapshot, CliError> {
    let wards: Vec<Ward> = load_collection(data_dir, WARDS_FILE)?;
    for ward_number in wards_with_unusable_area(&wards) {
        warn!("ward {ward_number} has no positive area; using its stored density as given");
    }
    Ok(Snapshot {
        cafes: load_collection(data_dir, CAFES_FILE)?,
        wards,
        roads: load_collection(data_dir, ROADS_FILE)?,
        amenities: load_collection(data_dir, AMENITIES_FILE)?,
    })
}

/// Ward numbers whose `area_sqkm` is zero, negative or not finite.
///
/// Deserialised wards bypass [`Ward::new`], so their stored density is not
/// derived from the area.
pub(crate) fn wards_with_unusable_area(wards: &[Ward]) -> Vec<u32> {
    wards
        .iter()
        .filter(|ward| !ward.area_sqkm.is_finite() || ward.area_sqkm <= 0.0)
        .map(|ward| ward.ward_number)
        .collect()
}

fn load_collection<T: DeserializeOwned>(
    data_dir: &Utf8Path,
    file_name: &str,
) -> Result<Vec<T>, CliError> {
    let path = data_dir.join(file_name);
    match cafelocate_fs::file_is_file(&path) {
        Ok(true) => {}
        Ok(false) => {
            debug!("{path} not present; treating it as empty");
            return Ok(Vec::new());
        }
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::MissingDataDir {
                path: data_dir.to_path_buf(),
            });
        }
        Err(source) => return Err(CliError::InspectDataFile { path, source }),
    }
    let contents =
        cafelocate_fs::read_to_string(&path).map_err(|source| CliError::ReadDataFile {
            path: path.clone(),
            source,
        })?;
    let records: Vec<T> =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseDataFile {
            path: path.clone(),
            source,
        })?;
    debug!("loaded {} records from {path}", records.len());
    Ok(records)
}

fn write_report(
    writer: &mut dyn Write,
    output: Option<&Utf8Path>,
    report: &SuitabilityReport,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    payload.push('\n');
    match output {
        Some(path) => {
            cafelocate_fs::write_string(path, &payload).map_err(|source| {
                CliError::WriteReportFile {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!("wrote report to {path}");
            Ok(())
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteReport),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AnalyzeConfig, CliError> {
    let merged = AnalyzeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AnalyzeConfig::try_from(merged)
}
