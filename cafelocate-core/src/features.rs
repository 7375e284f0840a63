//! The fixed-order feature vector fed to café-type classifiers.

use thiserror::Error;

/// Feature names in the order classifiers were trained on.
pub const FEATURE_NAMES: [&str; 4] = [
    "competitor_count",
    "avg_competitor_rating",
    "road_length_m",
    "population_density",
];

/// Site features in classifier order.
///
/// Field order mirrors [`FEATURE_NAMES`]; [`FeatureVector::to_array`] is the
/// only sanctioned way to flatten it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureVector {
    /// Open cafés within the search radius.
    pub competitor_count: usize,
    /// Mean rating of rated competitors, `0.0` when none are rated.
    pub avg_competitor_rating: f64,
    /// Road length near the site in metres.
    pub road_length_meters: f64,
    /// People per square kilometre at the site.
    pub population_density: f64,
}

/// Errors returned when building a [`FeatureVector`] from raw values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureVectorError {
    /// The slice did not hold exactly four values.
    #[error("expected {expected} features, got {actual}")]
    WrongLength {
        /// Required number of features.
        expected: usize,
        /// Number supplied.
        actual: usize,
    },
    /// The competitor count was negative, fractional or not finite.
    #[error("competitor count must be a non-negative whole number (got {0})")]
    InvalidCompetitorCount(f64),
}

impl FeatureVector {
    /// Flatten into classifier order.
    ///
    /// # Examples
    /// ```
    /// use cafelocate_core::FeatureVector;
    ///
    /// let features = FeatureVector {
    ///     competitor_count: 5,
    ///     avg_competitor_rating: 4.5,
    ///     road_length_meters: 3_000.0,
    ///     population_density: 13_000.0,
    /// };
    /// assert_eq!(features.to_array(), [5.0, 4.5, 3_000.0, 13_000.0]);
    /// ```
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.competitor_count as f64,
            self.avg_competitor_rating,
            self.road_length_meters,
            self.population_density,
        ]
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = FeatureVectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let &[count, avg_competitor_rating, road_length_meters, population_density] = values
        else {
            return Err(FeatureVectorError::WrongLength {
                expected: FEATURE_NAMES.len(),
                actual: values.len(),
            });
        };
        if !count.is_finite() || count < 0.0 || count.fract() != 0.0 {
            return Err(FeatureVectorError::InvalidCompetitorCount(count));
        }
        Ok(Self {
            competitor_count: count as usize,
            avg_competitor_rating,
            road_length_meters,
            population_density,
        })
    }
}
