//! Deterministic café-type rules used when no classifier is loaded.

use std::collections::BTreeMap;

use cafelocate_core::{CafeType, FeatureVector};

/// Probability every fallback label starts from before renormalising.
pub const FALLBACK_BASELINE: f64 = 0.25;

/// Pick a café type and confidence from the rule table.
///
/// Rules are checked in order and the first match wins:
///
/// | condition                                   | type           | confidence |
/// |---------------------------------------------|----------------|------------|
/// | density > 12 000 and competitors < 10       | `coffee_shop`  | 0.75       |
/// | road length > 2 500 m and avg rating > 4.0  | `bakery`       | 0.80       |
/// | competitors > 15 and density > 8 000        | `dessert_shop` | 0.70       |
/// | otherwise                                   | `restaurant`   | 0.65       |
#[must_use]
pub fn rule_fallback(features: &FeatureVector) -> (CafeType, f64) {
    let FeatureVector {
        competitor_count,
        avg_competitor_rating,
        road_length_meters,
        population_density,
    } = *features;
    if population_density > 12_000.0 && competitor_count < 10 {
        (CafeType::CoffeeShop, 0.75)
    } else if road_length_meters > 2_500.0 && avg_competitor_rating > 4.0 {
        (CafeType::Bakery, 0.80)
    } else if competitor_count > 15 && population_density > 8_000.0 {
        (CafeType::DessertShop, 0.70)
    } else {
        (CafeType::Restaurant, 0.65)
    }
}

/// Spread a rule-table prediction over the four requestable labels.
///
/// Each label starts at [`FALLBACK_BASELINE`], the predicted label takes
/// `confidence`, and the four values are rescaled to sum to one.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "renormalising a probability distribution"
)]
pub fn fallback_distribution(predicted: CafeType, confidence: f64) -> BTreeMap<CafeType, f64> {
    let raw: BTreeMap<CafeType, f64> = CafeType::REQUESTABLE
        .into_iter()
        .map(|label| {
            let weight = if label == predicted {
                confidence
            } else {
                FALLBACK_BASELINE
            };
            (label, weight)
        })
        .collect();
    let total: f64 = raw.values().sum();
    raw.into_iter()
        .map(|(label, weight)| (label, weight / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn features(count: usize, rating: f64, road: f64, density: f64) -> FeatureVector {
        FeatureVector {
            competitor_count: count,
            avg_competitor_rating: rating,
            road_length_meters: road,
            population_density: density,
        }
    }

    #[rstest]
    #[case(features(5, 4.5, 3_000.0, 13_000.0), CafeType::CoffeeShop, 0.75)]
    #[case(features(10, 4.5, 3_000.0, 13_000.0), CafeType::Bakery, 0.80)]
    #[case(features(16, 3.0, 100.0, 9_000.0), CafeType::DessertShop, 0.70)]
    #[case(features(15, 3.0, 100.0, 9_000.0), CafeType::Restaurant, 0.65)]
    #[case(features(0, 0.0, 0.0, 12_000.0), CafeType::Restaurant, 0.65)]
    #[case(features(3, 4.0, 2_600.0, 1_000.0), CafeType::Restaurant, 0.65)]
    fn applies_rules_in_order(
        #[case] input: FeatureVector,
        #[case] expected: CafeType,
        #[case] confidence: f64,
    ) {
        assert_eq!(rule_fallback(&input), (expected, confidence));
    }

    #[rstest]
    fn coffee_shop_distribution_renormalises() {
        let distribution = fallback_distribution(CafeType::CoffeeShop, 0.75);
        assert_eq!(distribution.len(), 4);
        let coffee = distribution[&CafeType::CoffeeShop];
        assert!((coffee - 0.5).abs() < 1e-12);
        assert!((distribution[&CafeType::Bakery] - 1.0 / 6.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn distribution_sums_to_one_and_favours_prediction(
            count in 0usize..40,
            rating in 0.0f64..5.0,
            road in 0.0f64..6_000.0,
            density in 0.0f64..40_000.0,
        ) {
            let (predicted, confidence) = rule_fallback(&features(count, rating, road, density));
            let distribution = fallback_distribution(predicted, confidence);
            let total: f64 = distribution.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
            let top = distribution.values().copied().fold(f64::MIN, f64::max);
            prop_assert_eq!(distribution[&predicted], top);
        }
    }
}
