use crate::Point;

/// A point amenity such as a school, hospital or bus stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amenity {
    /// OpenStreetMap node identifier.
    pub osm_id: i64,
    /// OpenStreetMap `amenity=*` value.
    pub amenity_type: String,
    /// Display name, when tagged.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
}

impl Amenity {
    /// Construct a located amenity.
    pub fn new(
        osm_id: i64,
        amenity_type: impl Into<String>,
        name: Option<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            osm_id,
            amenity_type: amenity_type.into(),
            name,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Resolve the amenity's position, if both columns hold a valid point.
    pub fn coordinate(&self) -> Option<Point> {
        self.latitude
            .zip(self.longitude)
            .and_then(|(lat, lng)| Point::new(lat, lng).ok())
    }
}
