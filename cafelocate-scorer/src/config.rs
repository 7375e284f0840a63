//! Tunable scoring configuration.

use cafelocate_core::RequestBounds;

/// How road length near a site is measured.
///
/// Switching modes changes scores for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RoadLengthMode {
    /// Count road segments with a vertex in range, 100 m each.
    #[default]
    SegmentCount,
    /// Sum the planar length of those roads in degrees, scaled by
    /// 111 139 m per degree.
    DegreeLength,
}

/// Settings shared by every analysis an analyser runs.
///
/// # Examples
/// ```
/// use cafelocate_scorer::{RoadLengthMode, ScoringConfig};
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.fallback_population_density, 5_000.0);
/// assert_eq!(config.top_n, 5);
/// assert_eq!(config.road_length_mode, RoadLengthMode::SegmentCount);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScoringConfig {
    /// Density used when no ward contains the site, people per km².
    pub fallback_population_density: f64,
    /// Length of the ranked café list.
    pub top_n: usize,
    /// Road length measurement.
    pub road_length_mode: RoadLengthMode,
    /// Limits applied to incoming requests.
    pub request_bounds: RequestBounds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fallback_population_density: 5_000.0,
            top_n: 5,
            road_length_mode: RoadLengthMode::SegmentCount,
            request_bounds: RequestBounds::default(),
        }
    }
}
