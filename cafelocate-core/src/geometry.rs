//! GeoJSON-shaped geometry carried by ward and road snapshots.
//!
//! Positions are `[lng, lat]` pairs as in GeoJSON. With the `serde`
//! feature the enums (de)serialise as GeoJSON geometry objects, e.g.
//! `{"type": "Polygon", "coordinates": [[[85.3, 27.7], ...]]}`.

use crate::Point;

/// A ring of `[lng, lat]` vertices; closing the ring is optional.
pub type Ring = Vec<[f64; 2]>;

/// Ward boundary geometry.
///
/// Only exterior rings take part in containment; interior rings (holes)
/// are carried but ignored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "coordinates")
)]
pub enum Boundary {
    /// A single polygon: exterior ring followed by optional holes.
    Polygon(Vec<Ring>),
    /// Several polygons, each an exterior ring followed by optional holes.
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Boundary {
    /// Iterate over the exterior ring of every constituent polygon.
    pub fn exterior_rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        let polygons: Box<dyn Iterator<Item = &Vec<Ring>> + '_> = match self {
            Self::Polygon(rings) => Box::new(std::iter::once(rings)),
            Self::MultiPolygon(polygons) => Box::new(polygons.iter()),
        };
        polygons.filter_map(|rings| rings.first())
    }

    /// Iterate over every exterior vertex that forms a valid [`Point`].
    pub fn exterior_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.exterior_rings()
            .flat_map(|ring| ring.iter().copied().filter_map(Point::from_lng_lat))
    }
}

/// Road centreline geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "coordinates")
)]
pub enum LineGeometry {
    /// One polyline.
    LineString(Vec<[f64; 2]>),
    /// Several disjoint polylines.
    MultiLineString(Vec<Vec<[f64; 2]>>),
}

impl LineGeometry {
    fn lines(&self) -> Box<dyn Iterator<Item = &Vec<[f64; 2]>> + '_> {
        match self {
            Self::LineString(line) => Box::new(std::iter::once(line)),
            Self::MultiLineString(lines) => Box::new(lines.iter()),
        }
    }

    /// Iterate over every vertex that forms a valid [`Point`].
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.lines()
            .flat_map(|line| line.iter().copied().filter_map(Point::from_lng_lat))
    }

    /// Planar length of all polylines, in degrees.
    ///
    /// Lines with fewer than two vertices contribute nothing.
    pub fn length_degrees(&self) -> f64 {
        self.lines()
            .map(|line| {
                line.windows(2)
                    .filter_map(|pair| match pair {
                        [[x1, y1], [x2, y2]] => Some((x2 - x1).hypot(y2 - y1)),
                        _ => None,
                    })
                    .sum::<f64>()
            })
            .sum()
    }
}
