//! Site suitability scoring for the Cafelocate engine.
//!
//! [`SiteAnalyzer`] ties the pieces together for one request:
//! - open cafés within the radius become competitors and feed the ranked
//!   list ([`rank_top_n`]);
//! - the containing ward supplies population density, falling back to
//!   [`ScoringConfig::fallback_population_density`];
//! - nearby roads give a road length according to [`RoadLengthMode`];
//! - [`compute_suitability_score`] folds those into a 0 to 100 score, and
//!   the [`PredictionAdapter`](cafelocate_predictor::PredictionAdapter)
//!   predicts a café type from the same features.
//!
//! [`SiteAnalyzer::analyze`] additionally reports amenities, surrounding
//! ward population and plain-language [`Insights`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod area;
mod config;
mod error;
mod insights;
mod ranking;
mod score;

pub use analyzer::{NearbyCafe, SiteAnalyzer, SuitabilityReport, SuitabilityResult, TopCafe};
pub use area::{AmenityGroup, AmenityReport, AreaPopulation, NearbyAmenity, WardSummary};
pub use config::{RoadLengthMode, ScoringConfig};
pub use error::AnalysisError;
pub use insights::{
    CompetitionLevel, Insights, LocationStrength, MarketPotential, RECOMMENDATION_THRESHOLD,
};
pub use ranking::{RankedCafe, rank_top_n, ranking_key};
pub use score::{
    COMPETITOR_SATURATION, DENSITY_SATURATION, ROAD_SATURATION_METERS, build_feature_vector,
    compute_suitability_score,
};
