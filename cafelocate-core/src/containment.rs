//! Ray-casting point-in-polygon tests over ward boundaries.
//!
//! Boundary handling follows the half-open ray-casting convention: a point
//! on an edge or vertex is inside when a horizontal ray cast towards
//! positive `x` crosses an odd number of edges whose `y` span is
//! `(min, max]`. For the unit square `[(0,0), (1,0), (1,1), (0,1)]` this
//! places `(1, 1)` inside while `(0, 0)`, `(1, 0)` and `(0, 1)` fall
//! outside. The result depends only on the inputs, so it is stable across
//! calls.

use log::trace;

use crate::{Boundary, Point, Ring, Ward};

/// Test whether `point` lies inside the ring described by `ring`.
///
/// `ring` is a sequence of `[lng, lat]` vertices; the last vertex connects
/// back to the first whether or not the ring is explicitly closed. Rings
/// with fewer than three vertices contain nothing.
///
/// # Examples
/// ```
/// use cafelocate_core::{Point, point_in_polygon};
///
/// let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
/// assert!(point_in_polygon(Point { lat: 0.5, lng: 0.5 }, &square));
/// assert!(!point_in_polygon(Point { lat: 2.0, lng: 2.0 }, &square));
/// ```
pub fn point_in_polygon(point: Point, ring: &[[f64; 2]]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let (x, y) = (point.lng, point.lat);
    let closing_edge = ring.last().zip(ring.first());
    let edges = ring
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some((from, to)),
            _ => None,
        })
        .chain(closing_edge);

    let mut inside = false;
    for (&[x1, y1], &[x2, y2]) in edges {
        // Horizontal edges never cross the ray; skipping them also keeps the
        // intersection from dividing by zero.
        if y1 == y2 {
            continue;
        }
        if y <= y1.min(y2) || y > y1.max(y2) || x > x1.max(x2) {
            continue;
        }
        let crosses = if x1 == x2 {
            true
        } else {
            let x_intersect = (y - y1) * (x2 - x1) / (y2 - y1) + x1;
            x <= x_intersect
        };
        if crosses {
            inside = !inside;
        }
    }
    inside
}

/// Test whether `point` lies inside any polygon's exterior ring.
///
/// Each polygon is a list of rings whose first entry is the exterior.
/// Interior rings are ignored, so points inside a hole still count as
/// contained.
pub fn point_in_multi_polygon(point: Point, polygons: &[Vec<Ring>]) -> bool {
    polygons
        .iter()
        .filter_map(|rings| rings.first())
        .any(|exterior| point_in_polygon(point, exterior))
}

impl Boundary {
    /// Test whether the boundary contains `point`.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Polygon(rings) => point_in_multi_polygon(point, std::slice::from_ref(rings)),
            Self::MultiPolygon(polygons) => point_in_multi_polygon(point, polygons),
        }
    }
}

/// Return the first ward, in collection order, whose boundary contains
/// `point`.
///
/// Wards without a boundary never match. `None` means the caller must fall
/// back to a configured population density.
pub fn find_containing_ward(point: Point, wards: &[Ward]) -> Option<&Ward> {
    let found = wards.iter().find(|ward| {
        ward.boundary
            .as_ref()
            .is_some_and(|boundary| boundary.contains(point))
    });
    if let Some(ward) = found {
        trace!("({}, {}) lies in ward {}", point.lat, point.lng, ward.ward_number);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, LineString, Polygon};
    use rstest::{fixture, rstest};

    fn at(x: f64, y: f64) -> Point {
        Point { lat: y, lng: x }
    }

    #[fixture]
    fn unit_square() -> Ring {
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
    }

    #[rstest]
    fn centre_of_unit_square_is_inside(unit_square: Ring) {
        assert!(point_in_polygon(at(0.5, 0.5), &unit_square));
    }

    #[rstest]
    #[case(2.0, 2.0)]
    #[case(-0.5, 0.5)]
    #[case(0.5, 1.5)]
    fn points_beyond_the_square_are_outside(unit_square: Ring, #[case] x: f64, #[case] y: f64) {
        assert!(!point_in_polygon(at(x, y), &unit_square));
    }

    #[rstest]
    #[case(0.0, 0.0, false)]
    #[case(1.0, 0.0, false)]
    #[case(0.0, 1.0, false)]
    #[case(1.0, 1.0, true)]
    fn vertices_follow_half_open_convention(
        unit_square: Ring,
        #[case] x: f64,
        #[case] y: f64,
        #[case] expected: bool,
    ) {
        for _ in 0..3 {
            assert_eq!(point_in_polygon(at(x, y), &unit_square), expected);
        }
    }

    #[rstest]
    fn closed_and_open_rings_agree(unit_square: Ring) {
        let mut closed = unit_square.clone();
        closed.push([0.0, 0.0]);
        for (x, y) in [(0.5, 0.5), (0.99, 0.01), (1.5, 0.5), (0.5, -0.1)] {
            assert_eq!(
                point_in_polygon(at(x, y), &unit_square),
                point_in_polygon(at(x, y), &closed)
            );
        }
    }

    #[rstest]
    fn horizontal_edge_at_point_latitude_is_ignored() {
        // The ray from (0.5, 1.0) runs along the top edge of this notch.
        let ring = vec![
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ];
        assert!(point_in_polygon(at(0.5, 1.0), &ring));
        assert!(!point_in_polygon(at(1.5, 1.5), &ring));
        assert!(point_in_polygon(at(1.5, 0.5), &ring));
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec![[0.0, 0.0]])]
    #[case(vec![[0.0, 0.0], [1.0, 1.0]])]
    fn degenerate_rings_contain_nothing(#[case] ring: Ring) {
        assert!(!point_in_polygon(at(0.0, 0.0), &ring));
    }

    #[rstest]
    fn concave_ring_matches_geo(#[values(0.25, 0.75, 1.25, 1.75)] x: f64) {
        let ring = vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [1.0, 0.5], [0.0, 2.0]];
        let polygon = Polygon::new(LineString::from(ring.clone()), Vec::new());
        for y in [0.25, 0.6, 1.0, 1.5, 1.9] {
            let ours = point_in_polygon(at(x, y), &ring);
            let theirs = polygon.contains(&geo::Point::new(x, y));
            assert_eq!(ours, theirs, "disagreement at ({x}, {y})");
        }
    }

    #[rstest]
    fn multi_polygon_matches_any_member(unit_square: Ring) {
        let far = vec![[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 11.0]];
        let polygons = vec![vec![unit_square], vec![far]];
        assert!(point_in_multi_polygon(at(10.5, 10.5), &polygons));
        assert!(point_in_multi_polygon(at(0.5, 0.5), &polygons));
        assert!(!point_in_multi_polygon(at(5.0, 5.0), &polygons));
    }

    #[rstest]
    fn holes_are_ignored(unit_square: Ring) {
        let hole = vec![[0.4, 0.4], [0.6, 0.4], [0.6, 0.6], [0.4, 0.6]];
        let boundary = Boundary::Polygon(vec![unit_square, hole]);
        assert!(boundary.contains(at(0.5, 0.5)));
    }

    #[rstest]
    fn first_matching_ward_wins(unit_square: Ring) {
        let overlapping = |number| {
            Ward::new(
                number,
                1_000,
                1.0,
                Some(Boundary::Polygon(vec![unit_square.clone()])),
            )
            .expect("valid ward")
        };
        let unbounded = Ward::new(1, 10, 1.0, None).expect("valid ward");
        let wards = vec![unbounded, overlapping(2), overlapping(3)];
        let found = find_containing_ward(at(0.5, 0.5), &wards).expect("ward found");
        assert_eq!(found.ward_number, 2);
        assert!(find_containing_ward(at(5.0, 5.0), &wards).is_none());
    }
}
