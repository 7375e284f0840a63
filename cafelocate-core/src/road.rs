use crate::LineGeometry;

/// A road segment imported from OpenStreetMap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    /// OpenStreetMap way identifier.
    pub osm_id: i64,
    /// Highway classification such as `primary` or `residential`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub road_type: String,
    /// Centreline geometry.
    pub geometry: LineGeometry,
}

impl Road {
    /// Construct a road.
    pub fn new(osm_id: i64, road_type: impl Into<String>, geometry: LineGeometry) -> Self {
        Self {
            osm_id,
            road_type: road_type.into(),
            geometry,
        }
    }
}
