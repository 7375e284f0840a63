use crate::{CafeType, Point};

/// A café snapshot supplied by the storage collaborator.
///
/// `location` and `latitude`/`longitude` describe the same position;
/// `location` wins when both are present. A café with neither is left out
/// of every spatial result.
///
/// # Examples
/// ```
/// use cafelocate_core::{Cafe, CafeType, Point};
///
/// let cafe = Cafe::new(1, "Himalayan Java", CafeType::CoffeeShop)
///     .with_coordinates(27.7152, 85.3123)
///     .with_rating(4.5, 320);
/// assert_eq!(cafe.coordinate(), Some(Point { lat: 27.7152, lng: 85.3123 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cafe {
    /// Storage identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Café category.
    pub cafe_type: CafeType,
    /// Geometry column, if populated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Point>,
    /// Plain latitude column.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// Plain longitude column.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
    /// Average review rating, usually `1.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
    /// Number of reviews behind `rating`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub review_count: u32,
    /// Whether the business is still trading.
    #[cfg_attr(feature = "serde", serde(default = "open_by_default"))]
    pub is_open: bool,
}

#[cfg(feature = "serde")]
const fn open_by_default() -> bool {
    true
}

impl Cafe {
    /// Construct an open, unrated café without coordinates.
    pub fn new(id: u64, name: impl Into<String>, cafe_type: CafeType) -> Self {
        Self {
            id,
            name: name.into(),
            cafe_type,
            location: None,
            latitude: None,
            longitude: None,
            rating: None,
            review_count: 0,
            is_open: true,
        }
    }

    /// Set the plain latitude/longitude columns.
    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Set the geometry column.
    #[must_use]
    pub fn with_location(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the rating and review count.
    #[must_use]
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = review_count;
        self
    }

    /// Set the review count while leaving the rating empty.
    #[must_use]
    pub fn with_reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    /// Mark the café as closed.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.is_open = false;
        self
    }

    /// Resolve the café's position.
    ///
    /// Prefers `location`; falls back to the latitude/longitude pair. Returns
    /// `None` when neither yields a valid [`Point`].
    pub fn coordinate(&self) -> Option<Point> {
        match self.location {
            Some(location) if location.is_valid() => Some(location),
            Some(_) => None,
            None => self
                .latitude
                .zip(self.longitude)
                .and_then(|(lat, lng)| Point::new(lat, lng).ok()),
        }
    }
}
