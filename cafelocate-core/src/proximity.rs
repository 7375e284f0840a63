//! Linear-scan radius queries.
//!
//! Every query walks the whole collection; there is no spatial index.
//! An entity matches when any of its vertices lies within the radius, and
//! the reported distance is that of its nearest vertex.

use crate::{Amenity, Cafe, Point, Road, Ward, haversine_distance_meters};

/// Average length assumed for each road segment found near a site.
pub const METERS_PER_ROAD_SEGMENT: f64 = 100.0;

/// Something with one or more positions on the map.
pub trait Located {
    /// Yield every position that represents the entity.
    ///
    /// Entities without a usable position yield nothing and are therefore
    /// never within any radius.
    fn vertices(&self) -> impl Iterator<Item = Point> + '_;
}

impl Located for Cafe {
    fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.coordinate().into_iter()
    }
}

impl Located for Amenity {
    fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.coordinate().into_iter()
    }
}

impl Located for Road {
    fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.geometry.vertices()
    }
}

impl Located for Ward {
    fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.boundary
            .iter()
            .flat_map(|boundary| boundary.exterior_vertices())
    }
}

/// An entity found by a radius query together with its distance.
#[derive(Debug, PartialEq)]
pub struct Nearby<'a, T> {
    /// The matching entity.
    pub entity: &'a T,
    /// Great-circle distance from the query point to the nearest vertex.
    pub distance_meters: f64,
}

impl<T> Clone for Nearby<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nearby<'_, T> {}

/// Find entities with a vertex within `radius_meters` of `origin`.
///
/// `vertices` extracts the positions of each entity. The radius is
/// inclusive. Results keep the input order; see
/// [`sort_by_distance_ascending`].
pub fn within_radius_by<'a, T, I, F>(
    origin: Point,
    radius_meters: f64,
    entities: &'a [T],
    vertices: F,
) -> Vec<Nearby<'a, T>>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = Point>,
{
    entities
        .iter()
        .filter_map(|entity| {
            let nearest = vertices(entity)
                .into_iter()
                .map(|vertex| haversine_distance_meters(origin, vertex))
                .reduce(f64::min)?;
            (nearest <= radius_meters).then_some(Nearby {
                entity,
                distance_meters: nearest,
            })
        })
        .collect()
}

/// Find [`Located`] entities within `radius_meters` of `origin`.
///
/// # Examples
/// ```
/// use cafelocate_core::{Cafe, CafeType, Point, within_radius};
///
/// let origin = Point { lat: 27.7172, lng: 85.324 };
/// let cafes = vec![
///     Cafe::new(1, "Next door", CafeType::Bakery).with_coordinates(27.7173, 85.324),
///     Cafe::new(2, "Across town", CafeType::Bakery).with_coordinates(27.65, 85.30),
///     Cafe::new(3, "Unmapped", CafeType::Bakery),
/// ];
/// let found = within_radius(origin, 500.0, &cafes);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].entity.id, 1);
/// ```
pub fn within_radius<T: Located>(
    origin: Point,
    radius_meters: f64,
    entities: &[T],
) -> Vec<Nearby<'_, T>> {
    within_radius_by(origin, radius_meters, entities, |entity| {
        entity.vertices()
    })
}

/// Sort query results nearest first.
///
/// The sort is stable, so equidistant entities keep their input order.
pub fn sort_by_distance_ascending<'a, T>(mut results: Vec<Nearby<'a, T>>) -> Vec<Nearby<'a, T>> {
    results.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    results
}

/// Approximate the road length near a site from the number of segments.
///
/// Each segment counts as [`METERS_PER_ROAD_SEGMENT`]; actual segment
/// lengths are not measured.
pub fn estimate_road_length_meters(segments_found: usize) -> f64 {
    segments_found as f64 * METERS_PER_ROAD_SEGMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CafeType, LineGeometry};
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> Point {
        Point {
            lat: 27.7172,
            lng: 85.324,
        }
    }

    /// Offset `metres` north of `origin`.
    fn north_of(origin: Point, metres: f64) -> (f64, f64) {
        (origin.lat + metres / 111_195.0, origin.lng)
    }

    fn cafe_at(id: u64, (lat, lng): (f64, f64)) -> Cafe {
        Cafe::new(id, format!("cafe {id}"), CafeType::CoffeeShop).with_coordinates(lat, lng)
    }

    #[rstest]
    fn keeps_input_order(origin: Point) {
        let cafes = vec![
            cafe_at(1, north_of(origin, 300.0)),
            cafe_at(2, north_of(origin, 100.0)),
            cafe_at(3, north_of(origin, 900.0)),
        ];
        let ids: Vec<_> = within_radius(origin, 500.0, &cafes)
            .iter()
            .map(|hit| hit.entity.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    fn sorting_is_nearest_first_and_stable(origin: Point) {
        let cafes = vec![
            cafe_at(1, north_of(origin, 300.0)),
            cafe_at(2, north_of(origin, 100.0)),
            cafe_at(3, north_of(origin, 300.0)),
        ];
        let ids: Vec<_> = sort_by_distance_ascending(within_radius(origin, 500.0, &cafes))
            .iter()
            .map(|hit| hit.entity.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[rstest]
    fn radius_is_inclusive(origin: Point) {
        let cafes = vec![cafe_at(1, north_of(origin, 250.0))];
        let exact = haversine_distance_meters(origin, cafes[0].coordinate().expect("located"));
        assert_eq!(within_radius(origin, exact, &cafes).len(), 1);
        assert!(within_radius(origin, exact - 1e-6, &cafes).is_empty());
    }

    #[rstest]
    fn unlocated_entities_never_match(origin: Point) {
        let cafes = vec![Cafe::new(9, "ghost", CafeType::Bakery)];
        assert!(within_radius(origin, 1e9, &cafes).is_empty());
    }

    #[rstest]
    fn road_matches_when_any_vertex_is_close(origin: Point) {
        let (near_lat, near_lng) = north_of(origin, 50.0);
        let (far_lat, far_lng) = north_of(origin, 5_000.0);
        let road = Road::new(
            1,
            "residential",
            LineGeometry::LineString(vec![[far_lng, far_lat], [near_lng, near_lat]]),
        );
        let roads = [road];
        let found = within_radius(origin, 500.0, &roads);
        assert_eq!(found.len(), 1);
        assert!((found[0].distance_meters - 50.0).abs() < 1.0);
    }

    #[rstest]
    fn custom_extractors_are_honoured(origin: Point) {
        let cafes = vec![cafe_at(1, north_of(origin, 100.0))];
        let found = within_radius_by(origin, 500.0, &cafes, |_| Vec::<Point>::new());
        assert!(found.is_empty());
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1, 100.0)]
    #[case(27, 2_700.0)]
    fn estimates_road_length_from_segment_count(#[case] segments: usize, #[case] metres: f64) {
        assert_eq!(estimate_road_length_meters(segments), metres);
    }
}
