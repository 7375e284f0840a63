//! Feature vectors in, café-type and suitability predictions out.

use std::collections::BTreeMap;
use std::sync::Arc;

use cafelocate_core::FeatureVector;
use log::debug;

use crate::{
    CafeTypePrediction, ClassifierHandle, PredictionError, PredictionSource, SuitabilityLevel,
    SuitabilityPrediction, TrainedModel, fallback_distribution, rule_fallback,
};

/// Largest accepted gap between a model distribution's sum and one.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Runs predictions against a shared [`ClassifierHandle`].
#[derive(Debug, Clone)]
pub struct PredictionAdapter {
    handle: Arc<ClassifierHandle>,
}

impl PredictionAdapter {
    /// Predict through `handle`.
    #[must_use]
    pub const fn new(handle: Arc<ClassifierHandle>) -> Self {
        Self { handle }
    }

    /// An adapter that always uses the rule table.
    #[must_use]
    pub fn rule_based() -> Self {
        Self::new(Arc::new(ClassifierHandle::absent()))
    }

    /// The handle backing this adapter.
    #[must_use]
    pub fn handle(&self) -> &ClassifierHandle {
        &self.handle
    }

    /// Predict the café type best suited to `features`.
    ///
    /// # Errors
    /// Returns [`PredictionError`] when a loaded classifier returns output
    /// that does not fit its label encoder. The rule table never fails.
    pub fn predict_cafe_type(
        &self,
        features: &FeatureVector,
    ) -> Result<CafeTypePrediction, PredictionError> {
        match self.handle.model() {
            Some(model) => predict_with_model(model, features),
            None => Ok(predict_with_rules(features)),
        }
    }

    /// Predict the suitability level for `features`.
    ///
    /// # Errors
    /// Propagates errors from [`PredictionAdapter::predict_cafe_type`].
    pub fn predict_suitability_level(
        &self,
        features: &FeatureVector,
    ) -> Result<SuitabilityPrediction, PredictionError> {
        self.predict_cafe_type(features)
            .map(|prediction| suitability_from_cafe_type(&prediction))
    }
}

/// Fold a café-type prediction into suitability levels.
///
/// Each level's probability is the sum of its member types' probabilities.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "summing class probabilities")]
pub fn suitability_from_cafe_type(prediction: &CafeTypePrediction) -> SuitabilityPrediction {
    let mut probabilities: BTreeMap<SuitabilityLevel, f64> = SuitabilityLevel::ALL
        .into_iter()
        .map(|level| (level, 0.0))
        .collect();
    for (&cafe_type, &probability) in &prediction.probabilities {
        *probabilities
            .entry(SuitabilityLevel::for_cafe_type(cafe_type))
            .or_insert(0.0) += probability;
    }
    SuitabilityPrediction {
        level: SuitabilityLevel::for_cafe_type(prediction.cafe_type),
        confidence: prediction.confidence,
        probabilities,
        source: prediction.source,
    }
}

fn predict_with_rules(features: &FeatureVector) -> CafeTypePrediction {
    let (cafe_type, confidence) = rule_fallback(features);
    debug!("rule fallback predicted {cafe_type} ({confidence})");
    CafeTypePrediction {
        cafe_type,
        confidence,
        probabilities: fallback_distribution(cafe_type, confidence),
        source: PredictionSource::RuleFallback,
    }
}

fn predict_with_model(
    model: &TrainedModel,
    features: &FeatureVector,
) -> Result<CafeTypePrediction, PredictionError> {
    let scores = model.classifier().predict(features.to_array());
    let classes = model.encoder().classes();
    if scores.probabilities.len() != classes.len() {
        return Err(PredictionError::WidthMismatch {
            expected: classes.len(),
            actual: scores.probabilities.len(),
        });
    }
    check_distribution(&scores.probabilities)?;
    let cafe_type = model.encoder().decode(scores.class_index).ok_or_else(|| {
        PredictionError::UnknownClassIndex {
            index: scores.class_index,
            classes: classes.len(),
        }
    })?;
    let confidence = scores.probabilities.iter().copied().fold(0.0, f64::max);
    debug!("classifier predicted {cafe_type} ({confidence})");
    Ok(CafeTypePrediction {
        cafe_type,
        confidence,
        probabilities: classes.iter().copied().zip(scores.probabilities).collect(),
        source: PredictionSource::Model,
    })
}

#[expect(clippy::float_arithmetic, reason = "summing class probabilities")]
fn check_distribution(probabilities: &[f64]) -> Result<(), PredictionError> {
    if let Some((index, &value)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, value)| !(0.0..=1.0).contains(*value))
    {
        return Err(PredictionError::InvalidProbability { index, value });
    }
    let total: f64 = probabilities.iter().sum();
    if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(PredictionError::UnnormalisedDistribution { total });
    }
    Ok(())
}
