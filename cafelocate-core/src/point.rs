//! WGS84 coordinates.

use geo::Coord;
use thiserror::Error;

/// A WGS84 position in decimal degrees.
///
/// Unlike GeoJSON, the struct names its axes explicitly; conversions into
/// `geo` types map `lng` to `x` and `lat` to `y`.
///
/// # Examples
/// ```
/// use cafelocate_core::Point;
///
/// # fn main() -> Result<(), cafelocate_core::PointError> {
/// let thamel = Point::new(27.7152, 85.3123)?;
/// assert_eq!(thamel.lat, 27.7152);
/// assert!(Point::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lng: f64,
}

/// Errors returned by [`Point::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PointError {
    /// A coordinate was NaN or infinite.
    #[error("coordinates must be finite (lat {lat}, lng {lng})")]
    NonFinite {
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lng: f64,
    },
    /// Latitude fell outside `-90..=90`.
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `-180..=180`.
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl Point {
    /// Validate and construct a [`Point`].
    pub fn new(lat: f64, lng: f64) -> Result<Self, PointError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(PointError::NonFinite { lat, lng });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PointError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(PointError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Build a point from a GeoJSON `[lng, lat]` position, if it is valid.
    pub fn from_lng_lat(position: [f64; 2]) -> Option<Self> {
        let [lng, lat] = position;
        Self::new(lat, lng).ok()
    }

    /// Report whether the coordinates satisfy the range invariants.
    ///
    /// Snapshots deserialised from storage bypass [`Point::new`], so spatial
    /// code re-checks before trusting a position.
    pub fn is_valid(&self) -> bool {
        Self::new(self.lat, self.lng).is_ok()
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Self {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        Self::new(point.lng, point.lat)
    }
}
