//! Prediction results returned by the adapter.

use std::collections::BTreeMap;
use std::fmt;

use cafelocate_core::CafeType;

/// Where a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PredictionSource {
    /// A trained classifier produced the prediction.
    Model,
    /// The deterministic rule table produced the prediction.
    RuleFallback,
}

/// Coarse suitability of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SuitabilityLevel {
    /// Coffee shops and bakeries thrive.
    High,
    /// Dessert shops, restaurant cafés and juice bars fit.
    Medium,
    /// Only niche formats fit.
    Low,
}

impl SuitabilityLevel {
    /// Every level, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Map a predicted café type onto its suitability level.
    #[must_use]
    pub const fn for_cafe_type(cafe_type: CafeType) -> Self {
        match cafe_type {
            CafeType::CoffeeShop | CafeType::Bakery => Self::High,
            CafeType::DessertShop | CafeType::Restaurant | CafeType::JuiceBar => Self::Medium,
            CafeType::IceCream | CafeType::CafeBar | CafeType::InternetCafe => Self::Low,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::High => "High Suitability",
            Self::Medium => "Medium Suitability",
            Self::Low => "Low Suitability",
        }
    }
}

impl fmt::Display for SuitabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A predicted café type with its class distribution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CafeTypePrediction {
    /// Most likely café type.
    pub cafe_type: CafeType,
    /// Confidence in `cafe_type`, in `0.0..=1.0`.
    pub confidence: f64,
    /// Probability per café type in the classifier's label space.
    pub probabilities: BTreeMap<CafeType, f64>,
    /// Model or rule table.
    pub source: PredictionSource,
}

/// A predicted suitability level with its distribution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuitabilityPrediction {
    /// Most likely level, derived from the predicted café type.
    pub level: SuitabilityLevel,
    /// Confidence carried over from the café-type prediction.
    pub confidence: f64,
    /// Summed café-type probabilities per level; every level is present.
    pub probabilities: BTreeMap<SuitabilityLevel, f64>,
    /// Model or rule table.
    pub source: PredictionSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CafeType::CoffeeShop, SuitabilityLevel::High)]
    #[case(CafeType::Bakery, SuitabilityLevel::High)]
    #[case(CafeType::DessertShop, SuitabilityLevel::Medium)]
    #[case(CafeType::Restaurant, SuitabilityLevel::Medium)]
    #[case(CafeType::JuiceBar, SuitabilityLevel::Medium)]
    #[case(CafeType::IceCream, SuitabilityLevel::Low)]
    #[case(CafeType::CafeBar, SuitabilityLevel::Low)]
    #[case(CafeType::InternetCafe, SuitabilityLevel::Low)]
    fn maps_every_label(#[case] cafe_type: CafeType, #[case] level: SuitabilityLevel) {
        assert_eq!(SuitabilityLevel::for_cafe_type(cafe_type), level);
    }
}
