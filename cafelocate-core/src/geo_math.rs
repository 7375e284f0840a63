//! Great-circle distance and degree conversions.

use crate::Point;

/// Mean Earth radius in metres used by [`haversine_distance_meters`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate metres per degree of latitude.
pub const METERS_PER_DEGREE: f64 = 111_139.0;

/// Great-circle distance between two points in metres.
///
/// The result is symmetric and exactly zero for identical points.
///
/// # Examples
/// ```
/// use cafelocate_core::{Point, haversine_distance_meters};
///
/// let a = Point { lat: 0.0, lng: 0.0 };
/// let b = Point { lat: 0.0, lng: 1.0 };
/// let d = haversine_distance_meters(a, b);
/// assert!((d - 111_194.9).abs() < 1.0);
/// ```
pub fn haversine_distance_meters(from: Point, to: Point) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let half_dlat = (to.lat - from.lat).to_radians() / 2.0;
    let half_dlng = (to.lng - from.lng).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlng.sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    2.0 * a.sqrt().min(1.0).asin() * EARTH_RADIUS_M
}

/// Convert a length expressed in degrees to metres.
///
/// This is a flat approximation using [`METERS_PER_DEGREE`]; it ignores
/// the shrinking of longitude degrees away from the equator.
pub fn degrees_to_meters_approx(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE
}
