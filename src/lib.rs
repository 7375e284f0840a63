//! Facade crate for the Cafelocate site suitability engine.
//!
//! This crate re-exports the domain types, the scorer and the café-type
//! predictor. The forest artefact loader sits behind the `forest` feature.
//!
//! ```
//! use cafelocate_engine::{CafeType, Point, ScoringConfig, SiteAnalyzer, Snapshot};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = SiteAnalyzer::with_rules(ScoringConfig::default());
//! let site = Point::new(27.7172, 85.324)?;
//! let request = analyzer.request(site, CafeType::CoffeeShop, None)?;
//! let snapshot = Snapshot::default();
//! let result = analyzer.assess(&request, &snapshot)?;
//! // Fallback density of 5 000 people/km² contributes 10 of 30 points.
//! assert_eq!(result.score, 50);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use cafelocate_core::{
    Amenity, AnalysisRequest, AnalysisRequestError, Boundary, BoundingBox, Cafe, CafeType,
    FEATURE_NAMES, FeatureVector, FeatureVectorError, LineGeometry, Point, PointError,
    RequestBounds, Road, Snapshot, UnknownCafeType, Ward, WardError, find_containing_ward,
    haversine_distance_meters, point_in_multi_polygon, point_in_polygon, within_radius,
};
pub use cafelocate_predictor::{
    CafeTypePrediction, ClassifierHandle, ClassifierLoadError, ClassifierLoader, ModelState,
    PredictionAdapter, PredictionError, PredictionSource, SuitabilityLevel, SuitabilityPrediction,
};
pub use cafelocate_scorer::{
    AnalysisError, Insights, RoadLengthMode, ScoringConfig, SiteAnalyzer, SuitabilityReport,
    SuitabilityResult, compute_suitability_score, rank_top_n,
};

#[cfg(feature = "forest")]
pub use cafelocate_predictor::{ForestArtifact, ForestLoader, RandomForest};
