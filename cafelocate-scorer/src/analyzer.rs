//! Site analysis: spatial facts, score, prediction and report.

use cafelocate_core::{
    AnalysisRequest, AnalysisRequestError, Cafe, CafeType, Nearby, Point, Snapshot,
    degrees_to_meters_approx, estimate_road_length_meters, find_containing_ward,
    sort_by_distance_ascending, within_radius,
};
use cafelocate_predictor::{
    CafeTypePrediction, PredictionAdapter, PredictionSource, SuitabilityPrediction,
    suitability_from_cafe_type,
};
use log::debug;
use std::collections::BTreeMap;

use crate::{
    AnalysisError, AmenityReport, AreaPopulation, Insights, RoadLengthMode, ScoringConfig,
    build_feature_vector, compute_suitability_score, rank_top_n,
};

/// Score, inputs and café-type prediction for one site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuitabilityResult {
    /// Deterministic 0 to 100 score.
    pub score: u8,
    /// Open cafés within the radius.
    pub competitor_count: usize,
    /// Road length near the site in metres.
    pub road_length_meters: f64,
    /// Density of the containing ward, or the configured fallback.
    pub population_density: f64,
    /// Predicted café type.
    pub predicted_type: CafeType,
    /// Confidence in `predicted_type`.
    pub confidence: f64,
    /// Probability per café type.
    pub probabilities: BTreeMap<CafeType, f64>,
    /// Model or rule table.
    pub prediction_source: PredictionSource,
}

/// An open café near the site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyCafe {
    /// The café snapshot.
    pub cafe: Cafe,
    /// Distance from the site in metres.
    pub distance_meters: f64,
}

/// A café in the ranked list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopCafe {
    /// The café snapshot.
    pub cafe: Cafe,
    /// `rating × ln(max(reviews, 1) + 1)`.
    pub ranking_key: f64,
}

/// Everything an analysis reports about a site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuitabilityReport {
    /// Analysed location.
    pub location: Point,
    /// Search radius in metres.
    pub radius_meters: u32,
    /// Café type the caller plans to open.
    pub requested_type: CafeType,
    /// Open cafés within the radius, nearest first.
    pub nearby_cafes: Vec<NearbyCafe>,
    /// Highest ranked nearby cafés.
    pub top_cafes: Vec<TopCafe>,
    /// Score and café-type prediction.
    pub suitability: SuitabilityResult,
    /// Suitability-level prediction.
    pub suitability_level: SuitabilityPrediction,
    /// Plain-language readings.
    pub insights: Insights,
    /// Amenities within the radius.
    pub amenities: AmenityReport,
    /// Wards around the site.
    pub area_population: AreaPopulation,
    /// Cafés left out for lacking usable coordinates.
    pub skipped_cafes: usize,
}

struct SiteFacts<'a> {
    /// Open cafés within the radius, in collection order.
    competitors: Vec<Nearby<'a, Cafe>>,
    road_length_meters: f64,
    population_density: f64,
}

/// Runs analyses with one configuration and prediction adapter.
///
/// Analyses are pure functions of the request and snapshot; repeated calls
/// with the same inputs return equal results.
///
/// # Examples
/// ```
/// use cafelocate_core::{AnalysisRequest, CafeType, Point, Snapshot, Ward};
/// use cafelocate_scorer::{ScoringConfig, SiteAnalyzer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = SiteAnalyzer::with_rules(ScoringConfig::default());
/// let request = analyzer.request(Point::new(27.7172, 85.324)?, CafeType::Bakery, None)?;
/// let result = analyzer.assess(&request, &Snapshot::default())?;
/// // No cafés, no roads, fallback density 5000: 40 + 0 + 10.
/// assert_eq!(result.score, 50);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SiteAnalyzer {
    config: ScoringConfig,
    predictor: PredictionAdapter,
}

impl SiteAnalyzer {
    /// Analyse with `config`, predicting through `predictor`.
    #[must_use]
    pub const fn new(config: ScoringConfig, predictor: PredictionAdapter) -> Self {
        Self { config, predictor }
    }

    /// Analyse with `config` and the rule table only.
    #[must_use]
    pub fn with_rules(config: ScoringConfig) -> Self {
        Self::new(config, PredictionAdapter::rule_based())
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The prediction adapter.
    #[must_use]
    pub const fn predictor(&self) -> &PredictionAdapter {
        &self.predictor
    }

    /// Validate a request against the configured bounds.
    ///
    /// # Errors
    /// Returns [`AnalysisRequestError`] when the radius, café type or
    /// location is rejected.
    pub fn request(
        &self,
        point: Point,
        cafe_type: CafeType,
        radius_meters: Option<u32>,
    ) -> Result<AnalysisRequest, AnalysisRequestError> {
        AnalysisRequest::new(point, cafe_type, radius_meters, &self.config.request_bounds)
    }

    /// Score a site and predict its café type.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Prediction`] when a loaded classifier
    /// returns undecodable output.
    pub fn assess(
        &self,
        request: &AnalysisRequest,
        snapshot: &Snapshot,
    ) -> Result<SuitabilityResult, AnalysisError> {
        let facts = self.gather(request, snapshot);
        let (result, _) = self.score(&facts)?;
        Ok(result)
    }

    /// Run the full analysis and assemble a report.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Prediction`] when a loaded classifier
    /// returns undecodable output.
    pub fn analyze(
        &self,
        request: &AnalysisRequest,
        snapshot: &Snapshot,
    ) -> Result<SuitabilityReport, AnalysisError> {
        let facts = self.gather(request, snapshot);
        let (suitability, prediction) = self.score(&facts)?;
        let suitability_level = suitability_from_cafe_type(&prediction);
        let top_cafes = rank_top_n(
            facts.competitors.iter().map(|hit| hit.entity),
            self.config.top_n,
        )
        .into_iter()
        .map(|ranked| TopCafe {
            cafe: ranked.cafe().clone(),
            ranking_key: ranked.ranking_key(),
        })
        .collect();
        let nearby_cafes = sort_by_distance_ascending(facts.competitors.clone())
            .into_iter()
            .map(|hit| NearbyCafe {
                cafe: hit.entity.clone(),
                distance_meters: hit.distance_meters,
            })
            .collect();
        let insights = Insights::new(
            suitability.score,
            suitability.competitor_count,
            suitability.population_density,
        );
        Ok(SuitabilityReport {
            location: request.point,
            radius_meters: request.radius_meters,
            requested_type: request.cafe_type,
            nearby_cafes,
            top_cafes,
            suitability,
            suitability_level,
            insights,
            amenities: AmenityReport::collect(request.point, request.radius(), &snapshot.amenities),
            area_population: AreaPopulation::collect(
                request.point,
                request.radius(),
                &snapshot.wards,
            ),
            skipped_cafes: snapshot.unlocated_cafe_count(),
        })
    }

    fn gather<'a>(&self, request: &AnalysisRequest, snapshot: &'a Snapshot) -> SiteFacts<'a> {
        let radius = request.radius();
        let skipped = snapshot.unlocated_cafe_count();
        if skipped > 0 {
            debug!("{skipped} cafes have no usable coordinates and were skipped");
        }
        let competitors: Vec<_> = within_radius(request.point, radius, &snapshot.cafes)
            .into_iter()
            .filter(|hit| hit.entity.is_open)
            .collect();

        let population_density = match find_containing_ward(request.point, &snapshot.wards) {
            Some(ward) => ward.population_density,
            None => {
                debug!(
                    "no ward contains ({}, {}); using fallback density {}",
                    request.point.lat, request.point.lng, self.config.fallback_population_density
                );
                self.config.fallback_population_density
            }
        };

        let roads = within_radius(request.point, radius, &snapshot.roads);
        let road_length_meters = match self.config.road_length_mode {
            RoadLengthMode::SegmentCount => estimate_road_length_meters(roads.len()),
            RoadLengthMode::DegreeLength => degrees_to_meters_approx(
                roads
                    .iter()
                    .map(|hit| hit.entity.geometry.length_degrees())
                    .sum(),
            ),
        };

        SiteFacts {
            competitors,
            road_length_meters,
            population_density,
        }
    }

    fn score(
        &self,
        facts: &SiteFacts<'_>,
    ) -> Result<(SuitabilityResult, CafeTypePrediction), AnalysisError> {
        let competitor_count = facts.competitors.len();
        let features = build_feature_vector(
            competitor_count,
            facts.competitors.iter().map(|hit| hit.entity),
            facts.road_length_meters,
            facts.population_density,
        );
        let score = compute_suitability_score(
            competitor_count,
            facts.road_length_meters,
            facts.population_density,
        );
        let prediction = self.predictor.predict_cafe_type(&features)?;
        let result = SuitabilityResult {
            score,
            competitor_count,
            road_length_meters: facts.road_length_meters,
            population_density: facts.population_density,
            predicted_type: prediction.cafe_type,
            confidence: prediction.confidence,
            probabilities: prediction.probabilities.clone(),
            prediction_source: prediction.source,
        };
        Ok((result, prediction))
    }
}
