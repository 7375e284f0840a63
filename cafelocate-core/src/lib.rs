//! Core domain types for the Cafelocate engine.
//!
//! The crate holds the immutable entity snapshots (cafés, wards, roads and
//! amenities) alongside the geometry the suitability analysis is built on:
//! great-circle distance, ray-casting containment and linear radius scans.
//! Validating constructors return `Result` so malformed requests are
//! rejected before any scoring happens.

pub mod amenity;
pub mod cafe;
pub mod cafe_type;
pub mod containment;
pub mod features;
pub mod geo_math;
pub mod geometry;
pub mod point;
pub mod proximity;
pub mod request;
pub mod road;
pub mod snapshot;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod ward;

pub use amenity::Amenity;
pub use cafe::Cafe;
pub use cafe_type::{CafeType, UnknownCafeType};
pub use containment::{find_containing_ward, point_in_multi_polygon, point_in_polygon};
pub use features::{FEATURE_NAMES, FeatureVector, FeatureVectorError};
pub use geo_math::{
    EARTH_RADIUS_M, METERS_PER_DEGREE, degrees_to_meters_approx, haversine_distance_meters,
};
pub use geometry::{Boundary, LineGeometry, Ring};
pub use point::{Point, PointError};
pub use proximity::{
    Located, METERS_PER_ROAD_SEGMENT, Nearby, estimate_road_length_meters, sort_by_distance_ascending,
    within_radius, within_radius_by,
};
pub use request::{
    AnalysisRequest, AnalysisRequestError, BoundingBox, DEFAULT_RADIUS_METERS, RequestBounds,
};
pub use road::Road;
pub use snapshot::Snapshot;
pub use ward::{Ward, WardError};
