//! Validated analysis requests.
//!
//! Requests are checked here, before the engine runs; the scoring code
//! assumes a valid request.

use thiserror::Error;

use crate::{CafeType, Point};

/// Radius used when the caller does not supply one.
pub const DEFAULT_RADIUS_METERS: u32 = 500;

/// An axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lng: f64,
    /// Eastern edge.
    pub max_lng: f64,
}

impl BoundingBox {
    /// The Kathmandu service area.
    pub const KATHMANDU: Self = Self {
        min_lat: 27.6,
        max_lat: 27.8,
        min_lng: 85.2,
        max_lng: 85.5,
    };

    /// Test whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: Point) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

/// Limits applied when validating a request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestBounds {
    /// Smallest accepted radius in metres.
    pub min_radius_meters: u32,
    /// Largest accepted radius in metres.
    pub max_radius_meters: u32,
    /// Area the point must fall in, if restricted.
    pub service_area: Option<BoundingBox>,
}

impl Default for RequestBounds {
    fn default() -> Self {
        Self {
            min_radius_meters: 100,
            max_radius_meters: 2_000,
            service_area: None,
        }
    }
}

/// Errors returned by [`AnalysisRequest::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisRequestError {
    /// The radius fell outside the configured bounds.
    #[error("radius {radius} m is outside {min}..={max} m")]
    RadiusOutOfRange {
        /// Requested radius.
        radius: u32,
        /// Smallest accepted radius.
        min: u32,
        /// Largest accepted radius.
        max: u32,
    },
    /// The point lay outside the service area.
    #[error("location ({lat}, {lng}) is outside the service area")]
    OutsideServiceArea {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lng: f64,
    },
    /// The café type cannot be requested.
    #[error("analysis is not available for cafe type '{0}'")]
    UnsupportedCafeType(CafeType),
}

/// A pinned location to analyse.
///
/// # Examples
/// ```
/// use cafelocate_core::{AnalysisRequest, CafeType, Point, RequestBounds};
///
/// # fn main() -> Result<(), cafelocate_core::AnalysisRequestError> {
/// let point = Point { lat: 27.7172, lng: 85.324 };
/// let request = AnalysisRequest::new(point, CafeType::Bakery, None, &RequestBounds::default())?;
/// assert_eq!(request.radius_meters, 500);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisRequest {
    /// Location under consideration.
    pub point: Point,
    /// Kind of café the caller plans to open.
    pub cafe_type: CafeType,
    /// Search radius in metres.
    pub radius_meters: u32,
}

impl AnalysisRequest {
    /// Validate and construct a request.
    ///
    /// `radius_meters` defaults to [`DEFAULT_RADIUS_METERS`].
    pub fn new(
        point: Point,
        cafe_type: CafeType,
        radius_meters: Option<u32>,
        bounds: &RequestBounds,
    ) -> Result<Self, AnalysisRequestError> {
        let radius = radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);
        if !(bounds.min_radius_meters..=bounds.max_radius_meters).contains(&radius) {
            return Err(AnalysisRequestError::RadiusOutOfRange {
                radius,
                min: bounds.min_radius_meters,
                max: bounds.max_radius_meters,
            });
        }
        if !cafe_type.is_requestable() {
            return Err(AnalysisRequestError::UnsupportedCafeType(cafe_type));
        }
        if bounds
            .service_area
            .is_some_and(|area| !area.contains(point))
        {
            return Err(AnalysisRequestError::OutsideServiceArea {
                lat: point.lat,
                lng: point.lng,
            });
        }
        Ok(Self {
            point,
            cafe_type,
            radius_meters: radius,
        })
    }

    /// The radius as floating-point metres.
    pub fn radius(&self) -> f64 {
        f64::from(self.radius_meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn centre() -> Point {
        Point {
            lat: 27.7172,
            lng: 85.324,
        }
    }

    #[rstest]
    #[case(99)]
    #[case(2_001)]
    fn rejects_radius_outside_bounds(centre: Point, #[case] radius: u32) {
        let result = AnalysisRequest::new(
            centre,
            CafeType::CoffeeShop,
            Some(radius),
            &RequestBounds::default(),
        );
        assert!(matches!(
            result,
            Err(AnalysisRequestError::RadiusOutOfRange { min: 100, max: 2_000, .. })
        ));
    }

    #[rstest]
    #[case(100)]
    #[case(2_000)]
    fn accepts_boundary_radii(centre: Point, #[case] radius: u32) {
        let request = AnalysisRequest::new(
            centre,
            CafeType::CoffeeShop,
            Some(radius),
            &RequestBounds::default(),
        )
        .expect("radius at bound is valid");
        assert_eq!(request.radius_meters, radius);
    }

    #[rstest]
    fn rejects_extended_label_types(centre: Point) {
        let result =
            AnalysisRequest::new(centre, CafeType::IceCream, None, &RequestBounds::default());
        assert_eq!(
            result,
            Err(AnalysisRequestError::UnsupportedCafeType(CafeType::IceCream))
        );
    }

    #[rstest]
    fn enforces_service_area() {
        let bounds = RequestBounds {
            service_area: Some(BoundingBox::KATHMANDU),
            ..RequestBounds::default()
        };
        let pokhara = Point {
            lat: 28.2096,
            lng: 83.9856,
        };
        assert!(matches!(
            AnalysisRequest::new(pokhara, CafeType::Bakery, None, &bounds),
            Err(AnalysisRequestError::OutsideServiceArea { .. })
        ));
    }
}
