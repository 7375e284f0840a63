//! The deterministic 0 to 100 suitability score.

use cafelocate_core::{Cafe, FeatureVector};

/// Competitor count at which the competition component reaches zero.
pub const COMPETITOR_SATURATION: f64 = 20.0;
/// Road length in metres at which the road component saturates.
pub const ROAD_SATURATION_METERS: f64 = 3_000.0;
/// Density at which the population component saturates.
pub const DENSITY_SATURATION: f64 = 15_000.0;

/// Combine competition, road access and density into a 0 to 100 score.
///
/// Competition contributes up to 40 points, falling linearly to zero at
/// [`COMPETITOR_SATURATION`] competitors. Road length and density each
/// contribute up to 30 points, saturating at [`ROAD_SATURATION_METERS`] and
/// [`DENSITY_SATURATION`]. The sum is rounded half to even.
///
/// # Examples
/// ```
/// use cafelocate_scorer::compute_suitability_score;
///
/// assert_eq!(compute_suitability_score(0, 3_000.0, 15_000.0), 100);
/// assert_eq!(compute_suitability_score(20, 0.0, 0.0), 0);
/// assert_eq!(compute_suitability_score(0, 0.0, 20_000.0), 70);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "score is a weighted float sum")]
#[expect(
    clippy::cast_precision_loss,
    reason = "competitor counts are far below 2^52"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 first"
)]
pub fn compute_suitability_score(
    competitor_count: usize,
    road_length_meters: f64,
    population_density: f64,
) -> u8 {
    let competition = (1.0 - competitor_count as f64 / COMPETITOR_SATURATION).max(0.0) * 40.0;
    let road = (road_length_meters / ROAD_SATURATION_METERS).clamp(0.0, 1.0) * 30.0;
    let population = (population_density / DENSITY_SATURATION).clamp(0.0, 1.0) * 30.0;
    (competition + road + population)
        .round_ties_even()
        .clamp(0.0, 100.0) as u8
}

/// Assemble the classifier features for a site.
///
/// `avg_competitor_rating` is the mean of the competitors' known ratings, or
/// `0.0` when none is rated.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "mean of ratings")]
#[expect(
    clippy::cast_precision_loss,
    reason = "rated competitor counts are far below 2^52"
)]
pub fn build_feature_vector<'a, I>(
    competitor_count: usize,
    competitors: I,
    road_length_meters: f64,
    population_density: f64,
) -> FeatureVector
where
    I: IntoIterator<Item = &'a Cafe>,
{
    let (sum, rated) = competitors
        .into_iter()
        .filter_map(|cafe| cafe.rating.filter(|rating| rating.is_finite()))
        .fold((0.0, 0_usize), |(sum, rated), rating| (sum + rating, rated + 1));
    let avg_competitor_rating = if rated == 0 { 0.0 } else { sum / rated as f64 };
    FeatureVector {
        competitor_count,
        avg_competitor_rating,
        road_length_meters,
        population_density,
    }
}
