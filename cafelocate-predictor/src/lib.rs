//! Café-type and suitability-level prediction for the Cafelocate engine.
//!
//! [`PredictionAdapter`] turns a [`FeatureVector`](cafelocate_core::FeatureVector)
//! into a café-type prediction and a three-level suitability prediction.
//! When a trained classifier is available through a [`ClassifierHandle`] the
//! adapter feeds it the features in their fixed order and decodes the class
//! index with the model's [`LabelEncoder`]. Otherwise a deterministic rule
//! table answers, and the result is tagged [`PredictionSource::RuleFallback`]
//! so callers can tell the two apart.
//!
//! With the `forest` feature, [`ForestLoader`] reads a JSON decision-forest
//! artefact from disk on first use.
//!
//! # Examples
//!
//! ```
//! use cafelocate_core::{CafeType, FeatureVector};
//! use cafelocate_predictor::{PredictionAdapter, PredictionSource, SuitabilityLevel};
//!
//! let adapter = PredictionAdapter::rule_based();
//! let features = FeatureVector {
//!     competitor_count: 5,
//!     avg_competitor_rating: 4.5,
//!     road_length_meters: 3_000.0,
//!     population_density: 13_000.0,
//! };
//! let level = adapter.predict_suitability_level(&features).expect("rule table never fails");
//! assert_eq!(level.level, SuitabilityLevel::High);
//! assert_eq!(level.source, PredictionSource::RuleFallback);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adapter;
mod classifier;
mod encoder;
mod error;
#[cfg(feature = "forest")]
mod forest;
mod prediction;
mod rules;

pub use adapter::{DISTRIBUTION_TOLERANCE, PredictionAdapter, suitability_from_cafe_type};
pub use classifier::{
    ClassScores, Classifier, ClassifierHandle, ClassifierLoader, ModelState, TrainedModel,
};
pub use encoder::LabelEncoder;
pub use error::{ClassifierLoadError, PredictionError};
#[cfg(feature = "forest")]
pub use forest::{ForestArtifact, ForestLoader, NodeArtifact, RandomForest, TreeArtifact};
pub use prediction::{CafeTypePrediction, PredictionSource, SuitabilityLevel, SuitabilityPrediction};
pub use rules::{FALLBACK_BASELINE, fallback_distribution, rule_fallback};
