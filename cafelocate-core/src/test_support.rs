//! Builders for snapshots used by unit and behaviour tests.
//!
//! Offsets use the haversine metre-per-degree at the equator scaled by the
//! cosine of the latitude, so positions land within a metre of the
//! requested distance for the radii the engine handles.

use crate::{Boundary, Cafe, CafeType, EARTH_RADIUS_M, LineGeometry, Point, Road, Ward};

/// Kathmandu Durbar Square area.
pub const KATHMANDU_CENTRE: Point = Point {
    lat: 27.7172,
    lng: 85.324,
};

/// Move `origin` by `north` and `east` metres.
pub fn offset_meters(origin: Point, north: f64, east: f64) -> Point {
    let meters_per_degree = EARTH_RADIUS_M.to_radians();
    Point {
        lat: origin.lat + north / meters_per_degree,
        lng: origin.lng + east / (meters_per_degree * origin.lat.to_radians().cos()),
    }
}

/// An open, unrated café at `point`.
pub fn cafe_at(id: u64, point: Point, cafe_type: CafeType) -> Cafe {
    Cafe::new(id, format!("Cafe {id}"), cafe_type).with_coordinates(point.lat, point.lng)
}

/// A closed square ring centred on `centre` with sides of `2 * half_side_deg`.
pub fn square_boundary(centre: Point, half_side_deg: f64) -> Boundary {
    let (x, y, h) = (centre.lng, centre.lat, half_side_deg);
    Boundary::Polygon(vec![vec![
        [x - h, y - h],
        [x + h, y - h],
        [x + h, y + h],
        [x - h, y + h],
        [x - h, y - h],
    ]])
}

/// A ward with a square boundary around `centre`.
///
/// # Panics
/// Panics when `area_sqkm` is not positive.
pub fn ward_around(
    ward_number: u32,
    population: u64,
    area_sqkm: f64,
    centre: Point,
    half_side_deg: f64,
) -> Ward {
    let boundary = square_boundary(centre, half_side_deg);
    match Ward::new(ward_number, population, area_sqkm, Some(boundary)) {
        Ok(ward) => ward,
        Err(err) => panic!("test ward must be valid: {err}"),
    }
}

/// A two-vertex road from `from` to `to`.
pub fn straight_road(osm_id: i64, from: Point, to: Point) -> Road {
    Road::new(
        osm_id,
        "residential",
        LineGeometry::LineString(vec![[from.lng, from.lat], [to.lng, to.lat]]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine_distance_meters;
    use rstest::rstest;

    #[rstest]
    #[case(250.0, 0.0)]
    #[case(0.0, 400.0)]
    #[case(-300.0, 300.0)]
    fn offsets_land_close_to_requested_distance(#[case] north: f64, #[case] east: f64) {
        let moved = offset_meters(KATHMANDU_CENTRE, north, east);
        let expected = north.hypot(east);
        let actual = haversine_distance_meters(KATHMANDU_CENTRE, moved);
        assert!((actual - expected).abs() < 1.0, "{actual} vs {expected}");
    }

    #[rstest]
    fn square_contains_its_centre() {
        let ward = ward_around(1, 1_000, 1.0, KATHMANDU_CENTRE, 0.01);
        let boundary = ward.boundary.as_ref().expect("boundary set");
        assert!(boundary.contains(KATHMANDU_CENTRE));
    }
}
