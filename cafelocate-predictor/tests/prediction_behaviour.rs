//! Behavioural coverage for the prediction adapter.

use std::cell::RefCell;
use std::sync::Arc;

use cafelocate_core::{CafeType, FeatureVector};
use cafelocate_predictor::{
    CafeTypePrediction, ClassScores, Classifier, ClassifierHandle, LabelEncoder,
    PredictionAdapter, PredictionSource, SuitabilityLevel, SuitabilityPrediction, TrainedModel,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct AlwaysInternetCafe;

impl Classifier for AlwaysInternetCafe {
    fn predict(&self, _features: [f64; 4]) -> ClassScores {
        ClassScores {
            class_index: 1,
            probabilities: vec![0.1, 0.9],
        }
    }
}

/// Adapter under test.
#[fixture]
pub fn adapter() -> RefCell<PredictionAdapter> {
    RefCell::new(PredictionAdapter::rule_based())
}

/// Site features for the scenario.
#[fixture]
pub fn features() -> RefCell<Option<FeatureVector>> {
    RefCell::new(None)
}

/// Café-type prediction captured by a `when` step.
#[fixture]
pub fn type_prediction() -> RefCell<Option<CafeTypePrediction>> {
    RefCell::new(None)
}

/// Suitability prediction captured by a `when` step.
#[fixture]
pub fn level_prediction() -> RefCell<Option<SuitabilityPrediction>> {
    RefCell::new(None)
}

fn set_features(
    features: &RefCell<Option<FeatureVector>>,
    competitor_count: usize,
    avg_competitor_rating: f64,
    road_length_meters: f64,
    population_density: f64,
) {
    *features.borrow_mut() = Some(FeatureVector {
        competitor_count,
        avg_competitor_rating,
        road_length_meters,
        population_density,
    });
}

fn current_features(features: &RefCell<Option<FeatureVector>>) -> FeatureVector {
    features
        .borrow()
        .unwrap_or_else(|| panic!("site features must be set"))
}

fn assert_type(
    type_prediction: &RefCell<Option<CafeTypePrediction>>,
    expected: CafeType,
    confidence: f64,
) {
    let binding = type_prediction.borrow();
    let prediction = binding
        .as_ref()
        .unwrap_or_else(|| panic!("prediction must be recorded"));
    assert_eq!(prediction.cafe_type, expected);
    assert!((prediction.confidence - confidence).abs() < 1e-12);
}

fn recorded_source(
    type_prediction: &RefCell<Option<CafeTypePrediction>>,
    level_prediction: &RefCell<Option<SuitabilityPrediction>>,
) -> PredictionSource {
    if let Some(prediction) = type_prediction.borrow().as_ref() {
        return prediction.source;
    }
    level_prediction
        .borrow()
        .as_ref()
        .map(|prediction| prediction.source)
        .unwrap_or_else(|| panic!("a prediction must be recorded"))
}

#[given("no trained classifier is available")]
fn no_classifier(#[from(adapter)] adapter: &RefCell<PredictionAdapter>) {
    *adapter.borrow_mut() = PredictionAdapter::rule_based();
}

#[given("a trained classifier that always predicts an internet café")]
#[expect(clippy::expect_used, reason = "fixture labels are known café types")]
fn internet_cafe_classifier(#[from(adapter)] adapter: &RefCell<PredictionAdapter>) {
    let encoder =
        LabelEncoder::from_labels(&["coffee_shop", "internet_cafe"]).expect("known labels");
    let handle = ClassifierHandle::with_model(TrainedModel::new(AlwaysInternetCafe, encoder));
    *adapter.borrow_mut() = PredictionAdapter::new(Arc::new(handle));
}

#[given("a site with 5 competitors, rating 4.5, 3000 m of road and density 13000")]
fn dense_site(#[from(features)] features: &RefCell<Option<FeatureVector>>) {
    set_features(features, 5, 4.5, 3_000.0, 13_000.0);
}

#[given("a site with 12 competitors, rating 4.2, 2600 m of road and density 9000")]
fn connected_site(#[from(features)] features: &RefCell<Option<FeatureVector>>) {
    set_features(features, 12, 4.2, 2_600.0, 9_000.0);
}

#[given("a site with 20 competitors, rating 3.5, 800 m of road and density 9000")]
fn saturated_site(#[from(features)] features: &RefCell<Option<FeatureVector>>) {
    set_features(features, 20, 3.5, 800.0, 9_000.0);
}

#[given("a site with 0 competitors, rating 0, 0 m of road and density 0")]
fn quiet_site(#[from(features)] features: &RefCell<Option<FeatureVector>>) {
    set_features(features, 0, 0.0, 0.0, 0.0);
}

#[when("I predict the café type")]
fn predict_type(
    #[from(adapter)] adapter: &RefCell<PredictionAdapter>,
    #[from(features)] features: &RefCell<Option<FeatureVector>>,
    #[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>,
) {
    let result = adapter.borrow().predict_cafe_type(&current_features(features));
    match result {
        Ok(prediction) => *type_prediction.borrow_mut() = Some(prediction),
        Err(err) => panic!("prediction should succeed: {err}"),
    }
}

#[when("I predict the suitability level")]
fn predict_level(
    #[from(adapter)] adapter: &RefCell<PredictionAdapter>,
    #[from(features)] features: &RefCell<Option<FeatureVector>>,
    #[from(level_prediction)] level_prediction: &RefCell<Option<SuitabilityPrediction>>,
) {
    let result = adapter
        .borrow()
        .predict_suitability_level(&current_features(features));
    match result {
        Ok(prediction) => *level_prediction.borrow_mut() = Some(prediction),
        Err(err) => panic!("prediction should succeed: {err}"),
    }
}

#[then("the prediction is a coffee shop with confidence 0.75")]
fn is_coffee_shop(#[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>) {
    assert_type(type_prediction, CafeType::CoffeeShop, 0.75);
}

#[then("the prediction is a bakery with confidence 0.80")]
fn is_bakery(#[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>) {
    assert_type(type_prediction, CafeType::Bakery, 0.80);
}

#[then("the prediction is a dessert shop with confidence 0.70")]
fn is_dessert_shop(#[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>) {
    assert_type(type_prediction, CafeType::DessertShop, 0.70);
}

#[then("the prediction is a restaurant café with confidence 0.65")]
fn is_restaurant(#[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>) {
    assert_type(type_prediction, CafeType::Restaurant, 0.65);
}

#[then("the type probabilities sum to one")]
fn probabilities_sum_to_one(
    #[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>,
) {
    let binding = type_prediction.borrow();
    let prediction = binding
        .as_ref()
        .unwrap_or_else(|| panic!("prediction must be recorded"));
    let total: f64 = prediction.probabilities.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "probabilities sum to {total}");
}

#[then("the prediction comes from the rule fallback")]
fn from_rules(
    #[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>,
    #[from(level_prediction)] level_prediction: &RefCell<Option<SuitabilityPrediction>>,
) {
    assert_eq!(
        recorded_source(type_prediction, level_prediction),
        PredictionSource::RuleFallback
    );
}

#[then("the prediction comes from the model")]
fn from_model(
    #[from(type_prediction)] type_prediction: &RefCell<Option<CafeTypePrediction>>,
    #[from(level_prediction)] level_prediction: &RefCell<Option<SuitabilityPrediction>>,
) {
    assert_eq!(
        recorded_source(type_prediction, level_prediction),
        PredictionSource::Model
    );
}

#[then("the suitability level is low")]
fn level_is_low(
    #[from(level_prediction)] level_prediction: &RefCell<Option<SuitabilityPrediction>>,
) {
    let binding = level_prediction.borrow();
    let prediction = binding
        .as_ref()
        .unwrap_or_else(|| panic!("prediction must be recorded"));
    assert_eq!(prediction.level, SuitabilityLevel::Low);
    assert!((prediction.confidence - 0.9).abs() < 1e-12);
}

#[scenario(path = "tests/features/prediction.feature", index = 0)]
fn dense_site_suits_coffee_shop(
    adapter: RefCell<PredictionAdapter>,
    features: RefCell<Option<FeatureVector>>,
    type_prediction: RefCell<Option<CafeTypePrediction>>,
    level_prediction: RefCell<Option<SuitabilityPrediction>>,
) {
    let _ = (adapter, features, type_prediction, level_prediction);
}

#[scenario(path = "tests/features/prediction.feature", index = 1)]
fn connected_site_suits_bakery(
    adapter: RefCell<PredictionAdapter>,
    features: RefCell<Option<FeatureVector>>,
    type_prediction: RefCell<Option<CafeTypePrediction>>,
    level_prediction: RefCell<Option<SuitabilityPrediction>>,
) {
    let _ = (adapter, features, type_prediction, level_prediction);
}

#[scenario(path = "tests/features/prediction.feature", index = 2)]
fn saturated_site_suits_dessert_shop(
    adapter: RefCell<PredictionAdapter>,
    features: RefCell<Option<FeatureVector>>,
    type_prediction: RefCell<Option<CafeTypePrediction>>,
    level_prediction: RefCell<Option<SuitabilityPrediction>>,
) {
    let _ = (adapter, features, type_prediction, level_prediction);
}

#[scenario(path = "tests/features/prediction.feature", index = 3)]
fn quiet_site_defaults_to_restaurant(
    adapter: RefCell<PredictionAdapter>,
    features: RefCell<Option<FeatureVector>>,
    type_prediction: RefCell<Option<CafeTypePrediction>>,
    level_prediction: RefCell<Option<SuitabilityPrediction>>,
) {
    let _ = (adapter, features, type_prediction, level_prediction);
}

#[scenario(path = "tests/features/prediction.feature", index = 4)]
fn extended_label_maps_to_low(
    adapter: RefCell<PredictionAdapter>,
    features: RefCell<Option<FeatureVector>>,
    type_prediction: RefCell<Option<CafeTypePrediction>>,
    level_prediction: RefCell<Option<SuitabilityPrediction>>,
) {
    let _ = (adapter, features, type_prediction, level_prediction);
}
