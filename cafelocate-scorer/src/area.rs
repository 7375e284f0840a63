//! Amenities and ward population around a site.

use std::collections::BTreeMap;

use cafelocate_core::{Amenity, Point, Ward, sort_by_distance_ascending, within_radius};

/// An amenity found near a site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyAmenity {
    /// OpenStreetMap node identifier.
    pub osm_id: i64,
    /// Display name, when tagged.
    pub name: Option<String>,
    /// Amenity position.
    pub location: Point,
    /// Distance from the site in metres.
    pub distance_meters: f64,
}

/// Amenities of one type near a site, nearest first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmenityGroup {
    /// Number of amenities in the group.
    pub count: usize,
    /// The amenities, nearest first.
    pub amenities: Vec<NearbyAmenity>,
}

/// Amenities within the radius grouped by `amenity_type`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmenityReport {
    /// Total amenities across all groups.
    pub total: usize,
    /// Groups keyed by amenity type.
    pub groups: BTreeMap<String, AmenityGroup>,
}

impl AmenityReport {
    /// Collect the amenities within `radius_meters` of `point`.
    ///
    /// Amenities without usable coordinates are skipped.
    #[must_use]
    pub fn collect(point: Point, radius_meters: f64, amenities: &[Amenity]) -> Self {
        let mut report = Self::default();
        for hit in sort_by_distance_ascending(within_radius(point, radius_meters, amenities)) {
            let Some(location) = hit.entity.coordinate() else {
                continue;
            };
            let group = report
                .groups
                .entry(hit.entity.amenity_type.clone())
                .or_default();
            group.count += 1;
            group.amenities.push(NearbyAmenity {
                osm_id: hit.entity.osm_id,
                name: hit.entity.name.clone(),
                location,
                distance_meters: hit.distance_meters,
            });
            report.total += 1;
        }
        report
    }
}

/// A ward touched by the analysis circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WardSummary {
    /// Ward number.
    pub ward_number: u32,
    /// Census population.
    pub population: u64,
    /// People per km².
    pub population_density: f64,
    /// Whether the ward contains the site itself.
    pub contains_site: bool,
}

/// Wards around a site and their combined population.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaPopulation {
    /// Touched wards in collection order.
    pub wards: Vec<WardSummary>,
    /// Sum of the touched wards' populations.
    pub total_population: u64,
}

impl AreaPopulation {
    /// Collect wards that contain `point` or have a boundary vertex within
    /// `radius_meters` of it.
    #[must_use]
    pub fn collect(point: Point, radius_meters: f64, wards: &[Ward]) -> Self {
        let nearby: Vec<u32> = within_radius(point, radius_meters, wards)
            .iter()
            .map(|hit| hit.entity.ward_number)
            .collect();
        let summaries: Vec<WardSummary> = wards
            .iter()
            .filter_map(|ward| {
                let contains_site = ward
                    .boundary
                    .as_ref()
                    .is_some_and(|boundary| boundary.contains(point));
                (contains_site || nearby.contains(&ward.ward_number)).then_some(WardSummary {
                    ward_number: ward.ward_number,
                    population: ward.population,
                    population_density: ward.population_density,
                    contains_site,
                })
            })
            .collect();
        let total_population = summaries
            .iter()
            .fold(0_u64, |total, ward| total.saturating_add(ward.population));
        Self {
            wards: summaries,
            total_population,
        }
    }
}
